//! Pagination and per-view load state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list view follows the same pattern: a `PageQuery` drives a request,
//! the response lands in a `Loadable`, and a `Pager` tracks where the user is
//! in the result set. Failures stay local to the view and are retryable.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use crate::net::types::{PageMeta, Paginated};

/// Query parameters accepted by every collection endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
    /// Comma-separated fields, `-` prefix for descending (`"name,-id"`).
    pub sort_by: Option<String>,
}

impl PageQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page: page.max(1), per_page: per_page.max(1), sort_by: None }
    }

    /// `page=1&per_page=10[&sort_by=..]`
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&per_page={}", self.page, self.per_page);
        if let Some(sort_by) = &self.sort_by {
            query.push_str("&sort_by=");
            query.push_str(&urlencoding::encode(sort_by));
        }
        query
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, crate::config::TABLE_PAGE_SIZE)
    }
}

/// Position within a paginated result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    per_page: u32,
    sort_by: Option<&'static str>,
    meta: Option<PageMeta>,
}

impl Pager {
    pub fn new(per_page: u32) -> Self {
        Self { page: 1, per_page: per_page.max(1), sort_by: None, meta: None }
    }

    /// Pager whose requests ask the server to order by `sort_by`.
    pub fn sorted(per_page: u32, sort_by: &'static str) -> Self {
        Self { sort_by: Some(sort_by), ..Self::new(per_page) }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn query(&self) -> PageQuery {
        PageQuery { sort_by: self.sort_by.map(str::to_owned), ..PageQuery::new(self.page, self.per_page) }
    }

    /// Record the server's view of the result set.
    pub fn observe(&mut self, meta: PageMeta) {
        self.page = meta.page.max(1);
        self.meta = Some(meta);
    }

    pub fn total_pages(&self) -> u32 {
        self.meta.map_or(1, |m| m.total_pages.max(1))
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// The pager bar is hidden when everything fits on one page.
    pub fn is_single_page(&self) -> bool {
        self.total_pages() <= 1
    }

    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Step back a page when the current one was emptied by a delete.
    pub fn settle_after_delete(&mut self, remaining_on_page: usize) {
        if remaining_on_page == 0 && self.page > 1 {
            self.page -= 1;
        }
    }

    /// "Page 2 of 5"
    pub fn summary(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }
}

/// Load state of one view's data.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

impl<T> Loadable<Paginated<T>> {
    /// Items of a ready page, empty otherwise.
    pub fn items(&self) -> &[T] {
        match self.ready() {
            Some(page) => &page.data,
            None => &[],
        }
    }
}

/// "1 car saved" / "3 cars saved"
pub fn count_label(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 { format!("{count} {singular}") } else { format!("{count} {plural}") }
}

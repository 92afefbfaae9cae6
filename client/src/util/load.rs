//! Async load and mutate helpers shared by the list pages.
//!
//! Requests only run in the browser. On the server the target stays in
//! `Loadable::Loading`, which matches what the unsettled session renders.

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::Paginated;
use crate::state::auth::AuthContext;
use crate::state::pager::{Loadable, PageQuery, Pager};

/// Fetch the pager's current page into `target`.
///
/// A 401 signs the user out; other failures land in `Loadable::Failed` and
/// stay local to the view.
pub fn load_page<T, F, Fut>(
    auth: AuthContext,
    pager: RwSignal<Pager>,
    target: RwSignal<Loadable<Paginated<T>>>,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: FnOnce(PageQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Paginated<T>, ApiError>> + 'static,
{
    target.set(Loadable::Loading);
    let query = pager.get_untracked().query();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match fetch(query).await {
            Ok(page) => {
                pager.update(|p| p.observe(page.meta));
                target.set(Loadable::Ready(page));
            }
            Err(e) => target.set(Loadable::Failed(auth.handle_api_error(&e))),
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, query, fetch);
    }
}

/// Fetch an unpaginated value into `target`.
pub fn load_value<T, Fut>(auth: AuthContext, target: RwSignal<Loadable<T>>, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    target.set(Loadable::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match fetch.await {
            Ok(value) => target.set(Loadable::Ready(value)),
            Err(e) => target.set(Loadable::Failed(auth.handle_api_error(&e))),
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, fetch);
    }
}

/// Run a mutation, reporting failure in `notice` and calling `on_success`
/// otherwise.
pub fn run_action<Fut, S>(auth: AuthContext, notice: RwSignal<String>, action: Fut, on_success: S)
where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    S: FnOnce() + 'static,
{
    notice.set(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match action.await {
            Ok(()) => on_success(),
            Err(e) => notice.set(auth.handle_api_error(&e)),
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, action, on_success);
    }
}

//! Role-to-section access table.
//!
//! All role comparisons go through this module. Menu visibility and per-view
//! permission are separate lists: a section can be reachable by URL for a role
//! that does not see it in the menu, and vice versa.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::claims::{Identity, Role};

/// A top-level screen of the authenticated area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Users,
    CarSpecs,
    Catalog,
    MyCars,
}

const ADMIN_MENU: &[Section] = &[Section::Users, Section::CarSpecs, Section::Catalog, Section::MyCars];
const CAR_SPEC_MENU: &[Section] = &[Section::CarSpecs, Section::Catalog];
const DEFAULT_MENU: &[Section] = &[Section::Catalog, Section::MyCars];

impl Section {
    pub const ALL: [Section; 4] = [Self::Users, Self::CarSpecs, Self::Catalog, Self::MyCars];

    /// Route path of the section's view.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Users => "/admin",
            Self::CarSpecs => "/car-spec",
            Self::Catalog => "/catalog",
            Self::MyCars => "/my-cars",
        }
    }

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::CarSpecs => "Car Specs",
            Self::Catalog => "Catalog",
            Self::MyCars => "My Cars",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.path() == path)
    }

    /// Whether an authenticated identity with `role` may open this view.
    #[must_use]
    pub fn permits(self, role: Option<&Role>) -> bool {
        match self {
            Self::Users => matches!(role, Some(Role::Admin)),
            Self::CarSpecs => matches!(role, Some(Role::Admin | Role::CarSpec)),
            Self::MyCars => matches!(role, Some(Role::Admin | Role::User)),
            Self::Catalog => true,
        }
    }
}

/// Navigation menu for `role`, in display order.
#[must_use]
pub fn menu_for(role: Option<&Role>) -> &'static [Section] {
    match role {
        Some(Role::Admin) => ADMIN_MENU,
        Some(Role::CarSpec) => CAR_SPEC_MENU,
        _ => DEFAULT_MENU,
    }
}

/// Where `/` sends an authenticated identity with `role`.
#[must_use]
pub fn landing_for(role: Option<&Role>) -> Section {
    match role {
        Some(Role::Admin) => Section::Users,
        Some(Role::CarSpec) => Section::CarSpecs,
        _ => Section::Catalog,
    }
}

/// Whether `identity` gets edit/delete actions on a record created by `created_by`.
#[must_use]
pub fn can_modify(identity: &Identity, created_by: i64) -> bool {
    identity.is_admin() || identity.id == created_by
}

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page applies its route gate, then owns the view-scoped loading and
//! delegates shared chrome to `components`. `browse` holds the catalog
//! hierarchy walked by both the catalog and car-spec views.

pub mod admin;
pub(crate) mod browse;
pub mod car_spec;
pub mod catalog;
pub mod home;
pub mod layout;
pub mod login;
pub mod my_cars;

//! REST wire types shared by the API helpers and pages.
//!
//! DESIGN
//! ======
//! Field names mirror the JSON bodies of the catalog API one-to-one so serde
//! needs no renames. Ids are plain integers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /login/access-token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
}

/// Partial user update; `None` fields are omitted from the body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// A role record as listed by `/roles`; distinct from the claim-level
/// `session::Role`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub created_by: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub brand_id: i64,
    pub created_by: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submodel {
    pub id: i64,
    pub name: String,
    pub model_id: i64,
    pub created_by: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub id: i64,
    pub name: String,
    pub year_start: i32,
    pub year_end: i32,
    pub submodel_id: i64,
    pub created_by: i64,
}

impl Generation {
    /// "Mk7 (2013-2020)"
    pub fn display_name(&self) -> String {
        format!("{} ({}-{})", self.name, self.year_start, self.year_end)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarSpec {
    pub id: i64,
    pub name: String,
    pub engine: String,
    pub horsepower: i32,
    pub torque: i32,
    pub fuel_type: String,
    pub year: i32,
    pub generation_id: i64,
    pub created_by: i64,
}

/// Create payload for brands, models and submodels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCreate {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationCreate {
    pub name: String,
    pub year_start: i32,
    pub year_end: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSpecCreate {
    pub name: String,
    pub engine: String,
    pub horsepower: i32,
    pub torque: i32,
    pub fuel_type: String,
    pub year: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCar {
    pub id: i64,
    pub user_id: i64,
    pub car_spec_id: i64,
}

/// Pagination block of every list response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

/// `{ data, meta }` envelope returned by collection endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

//! REST API helpers for the catalog server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! credential sent as a bearer token. Server-side (SSR): every call returns
//! [`ApiError::Unavailable`] since these endpoints are only called from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; list views turn errors into
//! a retryable "failed to load" state and a 401 signs the user out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{
    Brand, CarSpec, CarSpecCreate, Generation, GenerationCreate, LoginRequest, Model, NameCreate,
    Paginated, Permission, RoleRecord, Submodel, TokenResponse, User, UserCar, UserCreate,
    UserUpdate,
};
use crate::config::api_base;
use crate::state::pager::PageQuery;

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body could not be encoded or decoded.
    #[error("invalid body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The credential was missing, expired or revoked.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401))
    }

    /// Message suitable for the login form.
    pub fn login_message(&self) -> String {
        match self {
            Self::Status(401 | 403) => "Invalid credentials".to_owned(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Absolute URL for an API path.
pub fn url(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// `Authorization` header value for `credential`.
pub fn bearer(credential: &str) -> String {
    format!("Bearer {credential}")
}

fn with_query(path: &str, query: &PageQuery) -> String {
    format!("{path}?{}", query.to_query_string())
}

fn to_body<B: Serialize>(payload: &B) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Path builders, one per REST resource.
pub mod endpoints {
    pub const LOGIN: &str = "/login/access-token";
    pub const USERS: &str = "/users";
    pub const ROLES: &str = "/roles";
    pub const BRANDS: &str = "/brands";
    pub const MY_CARS: &str = "/my-cars";

    pub fn user(user_id: i64) -> String {
        format!("/users/{user_id}")
    }

    pub fn user_roles(user_id: i64) -> String {
        format!("/users/{user_id}/roles")
    }

    pub fn role_permissions(role_id: i64) -> String {
        format!("/roles/{role_id}/permissions")
    }

    pub fn brand(brand_id: i64) -> String {
        format!("/brands/{brand_id}")
    }

    pub fn models(brand_id: i64) -> String {
        format!("/brands/{brand_id}/models")
    }

    pub fn model(brand_id: i64, model_id: i64) -> String {
        format!("/brands/{brand_id}/models/{model_id}")
    }

    pub fn submodels(model_id: i64) -> String {
        format!("/models/{model_id}/submodels")
    }

    pub fn submodel(model_id: i64, submodel_id: i64) -> String {
        format!("/models/{model_id}/submodels/{submodel_id}")
    }

    pub fn generations(submodel_id: i64) -> String {
        format!("/submodels/{submodel_id}/generations")
    }

    pub fn generation(submodel_id: i64, generation_id: i64) -> String {
        format!("/submodels/{submodel_id}/generations/{generation_id}")
    }

    pub fn specs(generation_id: i64) -> String {
        format!("/generations/{generation_id}/specs")
    }

    pub fn spec_in(generation_id: i64, spec_id: i64) -> String {
        format!("/generations/{generation_id}/specs/{spec_id}")
    }

    pub fn spec(spec_id: i64) -> String {
        format!("/specs/{spec_id}")
    }

    pub fn my_car(spec_id: i64) -> String {
        format!("/my-cars/{spec_id}")
    }
}

fn assign_role_path(user_id: i64, role_name: &str) -> String {
    format!("/users/{user_id}/role?role_name={}", urlencoding::encode(role_name))
}

fn remove_role_path(user_id: i64, role_name: &str) -> String {
    format!("/users/{user_id}/roles/{}", urlencoding::encode(role_name))
}

#[cfg(feature = "hydrate")]
fn builder(verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;
    use session::TokenStore as _;

    let target = url(path);
    let builder = match verb {
        Verb::Get => Request::get(&target),
        Verb::Post => Request::post(&target),
        Verb::Put => Request::put(&target),
        Verb::Delete => Request::delete(&target),
    };
    match crate::util::storage::LocalTokenStore::default().load() {
        Some(credential) => builder.header("Authorization", &bearer(&credential)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn send(verb: Verb, path: &str, body: Option<Value>) -> Result<gloo_net::http::Response, ApiError> {
    let builder = builder(verb, path);
    let sent = match body {
        Some(body) => {
            builder
                .json(&body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        log::debug!("{verb:?} {path} -> {}", resp.status());
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

async fn request<T: DeserializeOwned>(verb: Verb, path: String, body: Option<Value>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(verb, &path, body).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

async fn request_empty(verb: Verb, path: String, body: Option<Value>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(verb, &path, body).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

// =============================================================
// Auth
// =============================================================

/// Exchange username + password for a bearer credential.
///
/// # Errors
///
/// `Status(401)` on bad credentials; see [`ApiError`].
pub async fn login(credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
    request(Verb::Post, endpoints::LOGIN.to_owned(), Some(to_body(credentials)?)).await
}

// =============================================================
// Users + roles
// =============================================================

/// # Errors
///
/// See [`ApiError`].
pub async fn list_users(query: &PageQuery) -> Result<Paginated<User>, ApiError> {
    request(Verb::Get, with_query(endpoints::USERS, query), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn create_user(payload: &UserCreate) -> Result<User, ApiError> {
    request(Verb::Post, endpoints::USERS.to_owned(), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn update_user(user_id: i64, payload: &UserUpdate) -> Result<User, ApiError> {
    request(Verb::Put, endpoints::user(user_id), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn delete_user(user_id: i64) -> Result<(), ApiError> {
    request_empty(Verb::Delete, endpoints::user(user_id), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn list_user_roles(user_id: i64) -> Result<Vec<RoleRecord>, ApiError> {
    request(Verb::Get, endpoints::user_roles(user_id), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn assign_role(user_id: i64, role_name: &str) -> Result<(), ApiError> {
    request_empty(Verb::Post, assign_role_path(user_id, role_name), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn remove_role(user_id: i64, role_name: &str) -> Result<(), ApiError> {
    request_empty(Verb::Delete, remove_role_path(user_id, role_name), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn list_roles() -> Result<Vec<RoleRecord>, ApiError> {
    request(Verb::Get, endpoints::ROLES.to_owned(), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn role_permissions(role_id: i64) -> Result<Vec<Permission>, ApiError> {
    request(Verb::Get, endpoints::role_permissions(role_id), None).await
}

// =============================================================
// Catalog hierarchy
// =============================================================

/// # Errors
///
/// See [`ApiError`].
pub async fn list_brands(query: &PageQuery) -> Result<Paginated<Brand>, ApiError> {
    request(Verb::Get, with_query(endpoints::BRANDS, query), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn create_brand(payload: &NameCreate) -> Result<Brand, ApiError> {
    request(Verb::Post, endpoints::BRANDS.to_owned(), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn update_brand(brand_id: i64, payload: &NameCreate) -> Result<Brand, ApiError> {
    request(Verb::Put, endpoints::brand(brand_id), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn delete_brand(brand_id: i64) -> Result<(), ApiError> {
    request_empty(Verb::Delete, endpoints::brand(brand_id), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn list_models(brand_id: i64, query: &PageQuery) -> Result<Paginated<Model>, ApiError> {
    request(Verb::Get, with_query(&endpoints::models(brand_id), query), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn create_model(brand_id: i64, payload: &NameCreate) -> Result<Model, ApiError> {
    request(Verb::Post, endpoints::models(brand_id), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn update_model(brand_id: i64, model_id: i64, payload: &NameCreate) -> Result<Model, ApiError> {
    request(Verb::Put, endpoints::model(brand_id, model_id), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn delete_model(brand_id: i64, model_id: i64) -> Result<(), ApiError> {
    request_empty(Verb::Delete, endpoints::model(brand_id, model_id), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn list_submodels(model_id: i64, query: &PageQuery) -> Result<Paginated<Submodel>, ApiError> {
    request(Verb::Get, with_query(&endpoints::submodels(model_id), query), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn create_submodel(model_id: i64, payload: &NameCreate) -> Result<Submodel, ApiError> {
    request(Verb::Post, endpoints::submodels(model_id), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn update_submodel(
    model_id: i64,
    submodel_id: i64,
    payload: &NameCreate,
) -> Result<Submodel, ApiError> {
    request(Verb::Put, endpoints::submodel(model_id, submodel_id), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn delete_submodel(model_id: i64, submodel_id: i64) -> Result<(), ApiError> {
    request_empty(Verb::Delete, endpoints::submodel(model_id, submodel_id), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn list_generations(
    submodel_id: i64,
    query: &PageQuery,
) -> Result<Paginated<Generation>, ApiError> {
    request(Verb::Get, with_query(&endpoints::generations(submodel_id), query), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn create_generation(
    submodel_id: i64,
    payload: &GenerationCreate,
) -> Result<Generation, ApiError> {
    request(Verb::Post, endpoints::generations(submodel_id), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn update_generation(
    submodel_id: i64,
    generation_id: i64,
    payload: &GenerationCreate,
) -> Result<Generation, ApiError> {
    request(
        Verb::Put,
        endpoints::generation(submodel_id, generation_id),
        Some(to_body(payload)?),
    )
    .await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn delete_generation(submodel_id: i64, generation_id: i64) -> Result<(), ApiError> {
    request_empty(Verb::Delete, endpoints::generation(submodel_id, generation_id), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn list_specs(generation_id: i64, query: &PageQuery) -> Result<Paginated<CarSpec>, ApiError> {
    request(Verb::Get, with_query(&endpoints::specs(generation_id), query), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn get_spec(spec_id: i64) -> Result<CarSpec, ApiError> {
    request(Verb::Get, endpoints::spec(spec_id), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn create_spec(generation_id: i64, payload: &CarSpecCreate) -> Result<CarSpec, ApiError> {
    request(Verb::Post, endpoints::specs(generation_id), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn update_spec(
    generation_id: i64,
    spec_id: i64,
    payload: &CarSpecCreate,
) -> Result<CarSpec, ApiError> {
    request(Verb::Put, endpoints::spec_in(generation_id, spec_id), Some(to_body(payload)?)).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn delete_spec(generation_id: i64, spec_id: i64) -> Result<(), ApiError> {
    request_empty(Verb::Delete, endpoints::spec_in(generation_id, spec_id), None).await
}

// =============================================================
// My cars
// =============================================================

/// # Errors
///
/// See [`ApiError`].
pub async fn list_my_cars(query: &PageQuery) -> Result<Paginated<CarSpec>, ApiError> {
    request(Verb::Get, with_query(endpoints::MY_CARS, query), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn add_my_car(spec_id: i64) -> Result<UserCar, ApiError> {
    request(Verb::Post, endpoints::my_car(spec_id), None).await
}

/// # Errors
///
/// See [`ApiError`].
pub async fn remove_my_car(spec_id: i64) -> Result<(), ApiError> {
    request_empty(Verb::Delete, endpoints::my_car(spec_id), None).await
}

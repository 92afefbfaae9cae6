//! Form validation for login, user and catalog editors.
//!
//! Each validator takes raw field text and returns the typed request payload,
//! or the first failing field's message for display under the form.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{
    CarSpec, CarSpecCreate, GenerationCreate, LoginRequest, NameCreate, UserCreate, UserUpdate,
};

const NAME_MAX: usize = 100;
const FUEL_TYPE_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;
const YEAR_MIN: i32 = 1900;
const YEAR_MAX: i32 = 2100;

/// A single field failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormError {
    pub field: &'static str,
    pub message: String,
}

impl FormError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

fn required(field: &'static str, label: &str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::new(field, format!("{label} is required")));
    }
    Ok(trimmed.to_owned())
}

fn bounded(field: &'static str, label: &str, value: &str, max: usize) -> Result<String, FormError> {
    let value = required(field, label, value)?;
    if value.chars().count() > max {
        return Err(FormError::new(field, format!("{label} must be at most {max} characters")));
    }
    Ok(value)
}

fn password(value: &str) -> Result<String, FormError> {
    if value.chars().count() < PASSWORD_MIN {
        return Err(FormError::new(
            "password",
            format!("Password must be at least {PASSWORD_MIN} characters"),
        ));
    }
    Ok(value.to_owned())
}

fn integer(field: &'static str, label: &str, value: &str) -> Result<i32, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::new(field, format!("{label} must be a number")))
}

fn year(field: &'static str, label: &str, value: &str) -> Result<i32, FormError> {
    let parsed = integer(field, label, value)?;
    if !(YEAR_MIN..=YEAR_MAX).contains(&parsed) {
        return Err(FormError::new(
            field,
            format!("{label} must be between {YEAR_MIN} and {YEAR_MAX}"),
        ));
    }
    Ok(parsed)
}

fn at_least_one(field: &'static str, label: &str, value: &str) -> Result<i32, FormError> {
    let parsed = integer(field, label, value)?;
    if parsed < 1 {
        return Err(FormError::new(field, format!("{label} is required")));
    }
    Ok(parsed)
}

/// # Errors
///
/// Username blank or password shorter than six characters.
pub fn validate_login(username: &str, password_text: &str) -> Result<LoginRequest, FormError> {
    Ok(LoginRequest {
        username: required("username", "Username", username)?,
        password: password(password_text)?,
    })
}

/// # Errors
///
/// Same rules as login.
pub fn validate_user_create(username: &str, password_text: &str) -> Result<UserCreate, FormError> {
    Ok(UserCreate {
        username: required("username", "Username", username)?,
        password: password(password_text)?,
    })
}

/// Blank fields are left unchanged; filled ones follow the create rules.
///
/// # Errors
///
/// A filled password shorter than six characters.
pub fn validate_user_update(username: &str, password_text: &str) -> Result<UserUpdate, FormError> {
    let username = username.trim();
    Ok(UserUpdate {
        username: (!username.is_empty()).then(|| username.to_owned()),
        password: if password_text.is_empty() { None } else { Some(password(password_text)?) },
    })
}

/// Brand, model and submodel share one name-only schema.
///
/// # Errors
///
/// Name blank or longer than 100 characters.
pub fn validate_name(name: &str) -> Result<NameCreate, FormError> {
    Ok(NameCreate { name: bounded("name", "Name", name, NAME_MAX)? })
}

/// # Errors
///
/// Bad name, or a year outside 1900..=2100.
pub fn validate_generation(
    name: &str,
    year_start: &str,
    year_end: &str,
) -> Result<GenerationCreate, FormError> {
    Ok(GenerationCreate {
        name: bounded("name", "Name", name, NAME_MAX)?,
        year_start: year("year_start", "Start year", year_start)?,
        year_end: year("year_end", "End year", year_end)?,
    })
}

/// Raw text of the car-spec editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarSpecFields {
    pub name: String,
    pub engine: String,
    pub horsepower: String,
    pub torque: String,
    pub fuel_type: String,
    pub year: String,
}

impl From<&CarSpec> for CarSpecFields {
    fn from(spec: &CarSpec) -> Self {
        Self {
            name: spec.name.clone(),
            engine: spec.engine.clone(),
            horsepower: spec.horsepower.to_string(),
            torque: spec.torque.to_string(),
            fuel_type: spec.fuel_type.clone(),
            year: spec.year.to_string(),
        }
    }
}

/// # Errors
///
/// The first failing field, in form order.
pub fn validate_car_spec(fields: &CarSpecFields) -> Result<CarSpecCreate, FormError> {
    Ok(CarSpecCreate {
        name: bounded("name", "Name", &fields.name, NAME_MAX)?,
        engine: bounded("engine", "Engine", &fields.engine, NAME_MAX)?,
        horsepower: at_least_one("horsepower", "Horsepower", &fields.horsepower)?,
        torque: at_least_one("torque", "Torque", &fields.torque)?,
        fuel_type: bounded("fuel_type", "Fuel type", &fields.fuel_type, FUEL_TYPE_MAX)?,
        year: year("year", "Year", &fields.year)?,
    })
}

use super::*;

fn spec_fields() -> CarSpecFields {
    CarSpecFields {
        name: "GTI".to_owned(),
        engine: "2.0 TSI".to_owned(),
        horsepower: "241".to_owned(),
        torque: "273".to_owned(),
        fuel_type: "Petrol".to_owned(),
        year: "2022".to_owned(),
    }
}

// =============================================================
// Login / users
// =============================================================

#[test]
fn login_trims_username_and_keeps_password() {
    let req = validate_login("  alice ", " secret1").expect("valid");
    assert_eq!(req.username, "alice");
    assert_eq!(req.password, " secret1");
}

#[test]
fn login_requires_username() {
    let err = validate_login("   ", "secret1").expect_err("invalid");
    assert_eq!(err.field, "username");
    assert_eq!(err.to_string(), "Username is required");
}

#[test]
fn login_requires_six_char_password() {
    let err = validate_login("alice", "12345").expect_err("invalid");
    assert_eq!(err.field, "password");
    assert_eq!(err.message, "Password must be at least 6 characters");
    assert!(validate_login("alice", "123456").is_ok());
}

#[test]
fn user_update_leaves_blank_fields_unchanged() {
    let update = validate_user_update("", "").expect("valid");
    assert_eq!(update, UserUpdate { username: None, password: None });
}

#[test]
fn user_update_checks_filled_password() {
    assert!(validate_user_update("bob", "123").is_err());
    let update = validate_user_update(" bob ", "hunter22").expect("valid");
    assert_eq!(update.username.as_deref(), Some("bob"));
    assert_eq!(update.password.as_deref(), Some("hunter22"));
}

#[test]
fn user_create_matches_login_rules() {
    assert!(validate_user_create("", "secret1").is_err());
    assert!(validate_user_create("carol", "short").is_err());
    assert_eq!(validate_user_create("carol", "secret1").expect("valid").username, "carol");
}

// =============================================================
// Catalog editors
// =============================================================

#[test]
fn name_bounds() {
    assert!(validate_name("").is_err());
    assert!(validate_name(&"x".repeat(100)).is_ok());
    let err = validate_name(&"x".repeat(101)).expect_err("too long");
    assert_eq!(err.message, "Name must be at most 100 characters");
}

#[test]
fn generation_years_must_be_in_range() {
    let generation = validate_generation("Mk7", "2013", "2020").expect("valid");
    assert_eq!((generation.year_start, generation.year_end), (2013, 2020));

    let err = validate_generation("Mk7", "1899", "2020").expect_err("early");
    assert_eq!(err.field, "year_start");
    let err = validate_generation("Mk7", "2013", "2101").expect_err("late");
    assert_eq!(err.field, "year_end");
}

#[test]
fn generation_year_must_be_numeric() {
    let err = validate_generation("Mk7", "soon", "2020").expect_err("nan");
    assert_eq!(err.message, "Start year must be a number");
}

#[test]
fn car_spec_happy_path() {
    let spec = validate_car_spec(&spec_fields()).expect("valid");
    assert_eq!(spec.horsepower, 241);
    assert_eq!(spec.year, 2022);
    assert_eq!(spec.fuel_type, "Petrol");
}

#[test]
fn car_spec_requires_positive_power_and_torque() {
    let mut fields = spec_fields();
    fields.horsepower = "0".to_owned();
    assert_eq!(validate_car_spec(&fields).expect_err("hp").message, "Horsepower is required");

    let mut fields = spec_fields();
    fields.torque = "-5".to_owned();
    assert_eq!(validate_car_spec(&fields).expect_err("torque").field, "torque");
}

#[test]
fn car_spec_fuel_type_limited_to_fifty_chars() {
    let mut fields = spec_fields();
    fields.fuel_type = "d".repeat(51);
    assert_eq!(validate_car_spec(&fields).expect_err("fuel").field, "fuel_type");
}

#[test]
fn car_spec_reports_first_failure_in_form_order() {
    let fields = CarSpecFields::default();
    assert_eq!(validate_car_spec(&fields).expect_err("empty").field, "name");
}

#[test]
fn car_spec_fields_prefill_from_record_and_validate_back() {
    let record = crate::net::types::CarSpec {
        id: 9,
        name: "GTI".to_owned(),
        engine: "2.0 TSI".to_owned(),
        horsepower: 245,
        torque: 370,
        fuel_type: "Petrol".to_owned(),
        year: 2020,
        generation_id: 4,
        created_by: 2,
    };
    let fields = CarSpecFields::from(&record);
    assert_eq!(fields.horsepower, "245");
    let payload = validate_car_spec(&fields).expect("valid");
    assert_eq!(payload.torque, 370);
    assert_eq!(payload.engine, "2.0 TSI");
}

use super::*;

fn unknown(label: &str) -> Role {
    Role::Unknown(label.to_owned())
}

// =============================================================
// Menu
// =============================================================

#[test]
fn admin_menu_is_exact() {
    assert_eq!(
        menu_for(Some(&Role::Admin)),
        &[Section::Users, Section::CarSpecs, Section::Catalog, Section::MyCars]
    );
}

#[test]
fn car_spec_menu_is_exact() {
    assert_eq!(menu_for(Some(&Role::CarSpec)), &[Section::CarSpecs, Section::Catalog]);
}

#[test]
fn user_unknown_and_missing_roles_share_default_menu() {
    let expected = &[Section::Catalog, Section::MyCars];
    assert_eq!(menu_for(Some(&Role::User)), expected);
    assert_eq!(menu_for(Some(&unknown("Guest"))), expected);
    assert_eq!(menu_for(None), expected);
}

#[test]
fn menu_labels_match_sections() {
    let labels: Vec<_> = menu_for(Some(&Role::Admin)).iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Users", "Car Specs", "Catalog", "My Cars"]);
}

// =============================================================
// Per-view permission
// =============================================================

#[test]
fn users_view_is_admin_only() {
    assert!(Section::Users.permits(Some(&Role::Admin)));
    assert!(!Section::Users.permits(Some(&Role::CarSpec)));
    assert!(!Section::Users.permits(Some(&Role::User)));
    assert!(!Section::Users.permits(None));
}

#[test]
fn car_spec_view_allows_admin_and_car_spec() {
    assert!(Section::CarSpecs.permits(Some(&Role::Admin)));
    assert!(Section::CarSpecs.permits(Some(&Role::CarSpec)));
    assert!(!Section::CarSpecs.permits(Some(&Role::User)));
    assert!(!Section::CarSpecs.permits(None));
}

#[test]
fn my_cars_view_allows_admin_and_user_only() {
    assert!(Section::MyCars.permits(Some(&Role::Admin)));
    assert!(Section::MyCars.permits(Some(&Role::User)));
    assert!(!Section::MyCars.permits(Some(&Role::CarSpec)));
    // Shown in the default menu but still refused on open.
    assert!(!Section::MyCars.permits(None));
    assert!(!Section::MyCars.permits(Some(&unknown("Guest"))));
}

#[test]
fn catalog_view_allows_everyone() {
    assert!(Section::Catalog.permits(None));
    assert!(Section::Catalog.permits(Some(&unknown("Guest"))));
}

#[test]
fn paths_round_trip() {
    for section in Section::ALL {
        assert_eq!(Section::from_path(section.path()), Some(section));
    }
    assert_eq!(Section::from_path("/nope"), None);
}

// =============================================================
// Landing + ownership
// =============================================================

#[test]
fn landing_follows_role() {
    assert_eq!(landing_for(Some(&Role::Admin)), Section::Users);
    assert_eq!(landing_for(Some(&Role::CarSpec)), Section::CarSpecs);
    assert_eq!(landing_for(Some(&Role::User)), Section::Catalog);
    assert_eq!(landing_for(None), Section::Catalog);
}

#[test]
fn landing_is_always_permitted() {
    for role in [Some(Role::Admin), Some(Role::CarSpec), Some(Role::User), Some(unknown("x")), None] {
        assert!(landing_for(role.as_ref()).permits(role.as_ref()));
    }
}

#[test]
fn admin_can_modify_anything() {
    let admin = Identity { id: 1, role: Some(Role::Admin) };
    assert!(can_modify(&admin, 99));
}

#[test]
fn others_can_modify_only_their_own_records() {
    let editor = Identity { id: 7, role: Some(Role::CarSpec) };
    assert!(can_modify(&editor, 7));
    assert!(!can_modify(&editor, 8));
}

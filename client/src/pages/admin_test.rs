use super::*;
use crate::net::types::Permission;

fn role(id: i64, name: &str) -> RoleRecord {
    RoleRecord { id, name: name.to_owned(), description: None, permissions: Vec::new() }
}

#[test]
fn assignable_excludes_held_roles() {
    let all = vec![role(1, "Admin"), role(2, "CarSpec"), role(3, "User")];
    let held = vec![role(3, "User")];
    let names: Vec<_> = assignable(&all, &held).into_iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Admin", "CarSpec"]);
}

#[test]
fn assignable_is_everything_for_a_bare_user() {
    let all = vec![role(1, "Admin"), role(2, "CarSpec")];
    assert_eq!(assignable(&all, &[]).len(), 2);
}

#[test]
fn permission_summary_lists_names() {
    let mut admin = role(1, "Admin");
    admin.permissions = vec![
        Permission { id: 1, name: "users.read".to_owned(), description: None },
        Permission { id: 2, name: "users.write".to_owned(), description: None },
    ];
    assert_eq!(permission_summary(&admin), "users.read, users.write");
    assert_eq!(permission_summary(&role(2, "User")), "none");
}

#[test]
fn blank_edit_form_is_a_noop() {
    let update = validate_user_update("  ", "").unwrap();
    assert!(is_noop_update(&update));
}

#[test]
fn rename_or_new_password_is_an_update() {
    assert!(!is_noop_update(&validate_user_update("carol", "").unwrap()));
    assert!(!is_noop_update(&validate_user_update("", "hunter22").unwrap()));
}

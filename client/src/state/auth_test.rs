use super::*;
use session::Role;

#[test]
fn role_badge_shows_role_label() {
    let identity = Identity { id: 1, role: Some(Role::CarSpec) };
    assert_eq!(role_badge(Some(&identity)).as_deref(), Some("CarSpec"));
}

#[test]
fn role_badge_keeps_unknown_labels() {
    let identity = Identity { id: 1, role: Some(Role::Unknown("Auditor".to_owned())) };
    assert_eq!(role_badge(Some(&identity)).as_deref(), Some("Auditor"));
}

#[test]
fn role_badge_hidden_without_role_or_identity() {
    let identity = Identity { id: 1, role: None };
    assert_eq!(role_badge(Some(&identity)), None);
    assert_eq!(role_badge(None), None);
}

#[test]
fn auth_error_messages_are_descriptive() {
    assert_eq!(AuthError::Disposed.to_string(), "session context disposed");
    let rejected = AuthError::from(DecodeError::MissingPayload);
    assert_eq!(rejected.to_string(), "credential rejected: credential has no payload segment");
}

/// Payload `{"sub":"5","exp":9999999999,"role":"Admin"}`.
const ADMIN_CREDENTIAL: &str = "header.eyJzdWIiOiI1IiwiZXhwIjo5OTk5OTk5OTk5LCJyb2xlIjoiQWRtaW4ifQ==.sig";

fn signed_in() -> AuthContext {
    let auth = AuthContext::new(SessionConfig::default());
    auth.login(ADMIN_CREDENTIAL).unwrap();
    auth
}

#[test]
fn login_signs_the_user_in() {
    let owner = Owner::new();
    owner.set();

    let auth = AuthContext::new(SessionConfig::default());
    assert!(!auth.is_authenticated());
    let identity = auth.login(ADMIN_CREDENTIAL).unwrap();
    assert_eq!(identity.id, 5);
    assert!(auth.is_authenticated());
    assert_eq!(auth.phase(), Phase::Authenticated);
    assert_eq!(auth.credential_untracked().as_deref(), Some(ADMIN_CREDENTIAL));
    assert!(auth.can_modify(99));
}

#[test]
fn unreadable_login_leaves_the_session_alone() {
    let owner = Owner::new();
    owner.set();

    let auth = AuthContext::new(SessionConfig::default());
    assert!(matches!(auth.login("not-a-credential"), Err(AuthError::Rejected(_))));
    assert!(!auth.is_authenticated());
}

#[test]
fn unauthorized_response_signs_out() {
    let owner = Owner::new();
    owner.set();

    let auth = signed_in();
    let message = auth.handle_api_error(&ApiError::Status(401));
    assert_eq!(message, "Session expired. Please sign in again.");
    assert!(!auth.is_authenticated());
    assert_eq!(auth.credential_untracked(), None);
}

#[test]
fn other_failures_keep_the_session() {
    let owner = Owner::new();
    owner.set();

    let auth = signed_in();
    let message = auth.handle_api_error(&ApiError::Status(500));
    assert_eq!(message, "server responded with status 500");
    assert!(auth.is_authenticated());
}

#[test]
fn logout_clears_identity() {
    let owner = Owner::new();
    owner.set();

    let auth = signed_in();
    auth.logout();
    assert!(!auth.is_authenticated());
    assert_eq!(auth.identity(), None);
}

#[test]
fn use_auth_reads_the_provided_context() {
    let owner = Owner::new();
    owner.set();

    provide_context(signed_in());
    assert_eq!(use_auth().identity().map(|identity| identity.id), Some(5));
}

#[test]
#[should_panic]
fn use_auth_outside_provider_panics() {
    let owner = Owner::new();
    owner.set();

    let _ = use_auth();
}

use super::*;
use session::DecodeError;

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "Sign in");
    assert_eq!(submit_label(true), "Signing in...");
}

#[test]
fn unreadable_credential_has_friendly_message() {
    let err = AuthError::Rejected(DecodeError::MissingPayload);
    assert_eq!(credential_failure_message(&err), "The server issued an unreadable credential.");
}

#[test]
fn disposed_context_reports_itself() {
    assert_eq!(credential_failure_message(&AuthError::Disposed), "session context disposed");
}

#[test]
fn successful_login_flips_the_gate_to_home() {
    use crate::state::auth::AuthContext;
    use session::{HOME_PATH, SessionConfig, ViewGate};

    let owner = Owner::new();
    owner.set();

    let auth = AuthContext::new(SessionConfig::default());
    auth.login("header.eyJzdWIiOiI1IiwiZXhwIjo5OTk5OTk5OTk5LCJyb2xlIjoiQWRtaW4ifQ==.sig").unwrap();
    assert_eq!(auth.login_gate(), ViewGate::Redirect(HOME_PATH));
    assert_eq!(auth.login_gate().redirect_target(), Some(HOME_PATH));
}

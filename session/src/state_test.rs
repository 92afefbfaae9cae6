use super::*;
use crate::claims::Role;
use crate::store::MemoryTokenStore;
use crate::support::{NOW_MS, expired, fresh};

const SAMPLE: &str = "header.eyJzdWIiOiI1IiwiZXhwIjo5OTk5OTk5OTk5LCJyb2xlIjoiQWRtaW4ifQ==.sig";

fn booted(store: &MemoryTokenStore) -> AuthSession<MemoryTokenStore> {
    let mut session = AuthSession::new(store.clone());
    session.bootstrap(NOW_MS);
    session
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_session_is_bootstrapping() {
    let session = AuthSession::new(MemoryTokenStore::new());
    assert_eq!(session.phase(), Phase::Bootstrapping);
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
    assert!(session.identity().is_none());
}

#[test]
fn default_state_is_bootstrapping() {
    assert_eq!(SessionState::default(), SessionState::bootstrapping());
    assert_eq!(SessionState::default().phase(), Phase::Bootstrapping);
}

// =============================================================
// Bootstrap
// =============================================================

#[test]
fn bootstrap_without_credential_is_anonymous() {
    let store = MemoryTokenStore::new();
    let session = booted(&store);
    assert_eq!(session.phase(), Phase::Anonymous);
    assert!(!session.is_loading());
}

#[test]
fn bootstrap_with_fresh_credential_restores_identity() {
    let token = fresh("12", Some("CarSpec"));
    let store = MemoryTokenStore::seeded(&token);
    let session = booted(&store);
    assert_eq!(session.phase(), Phase::Authenticated);
    assert_eq!(session.identity(), Some(&Identity { id: 12, role: Some(Role::CarSpec) }));
    assert_eq!(session.credential(), Some(token.as_str()));
    assert_eq!(store.load(), Some(token));
}

#[test]
fn bootstrap_with_expired_admin_credential_clears_storage() {
    let store = MemoryTokenStore::seeded(&expired("1", Some("Admin")));
    let session = booted(&store);
    assert_eq!(session.phase(), Phase::Anonymous);
    assert!(session.identity().is_none());
    assert_eq!(store.load(), None);
}

#[test]
fn bootstrap_with_garbage_is_anonymous_and_clears_as_expired() {
    // Unreadable payload fails the expiry check first, so it is cleared.
    let store = MemoryTokenStore::seeded("not-a-token");
    let session = booted(&store);
    assert_eq!(session.phase(), Phase::Anonymous);
    assert_eq!(store.load(), None);
}

#[test]
fn bootstrap_with_bad_subject_retains_credential_by_default() {
    let token = fresh("not-a-number", Some("Admin"));
    let store = MemoryTokenStore::seeded(&token);
    let session = booted(&store);
    assert_eq!(session.phase(), Phase::Anonymous);
    assert_eq!(store.load(), Some(token));
}

#[test]
fn bootstrap_with_bad_subject_clears_under_clear_policy() {
    let store = MemoryTokenStore::seeded(&fresh("not-a-number", None));
    let config = SessionConfig { malformed: MalformedPolicy::Clear };
    let mut session = AuthSession::with_config(store.clone(), config);
    assert_eq!(session.bootstrap(NOW_MS), Phase::Anonymous);
    assert_eq!(store.load(), None);
}

#[test]
fn bootstrap_without_role_claim_authenticates_with_no_role() {
    let store = MemoryTokenStore::seeded(&fresh("9", None));
    let session = booted(&store);
    assert!(session.is_authenticated());
    assert_eq!(session.identity().map(|i| i.role.clone()), Some(None));
}

#[test]
fn bootstrap_runs_only_once() {
    let store = MemoryTokenStore::new();
    let mut session = AuthSession::new(store.clone());
    assert_eq!(session.bootstrap(NOW_MS), Phase::Anonymous);
    store.save(&fresh("4", Some("User")));
    assert_eq!(session.bootstrap(NOW_MS), Phase::Anonymous);
    assert!(session.identity().is_none());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_sets_identity_and_persists() {
    let store = MemoryTokenStore::new();
    let mut session = booted(&store);
    let identity = session.login(SAMPLE).expect("login").clone();
    assert_eq!(identity, Identity { id: 5, role: Some(Role::Admin) });
    assert!(session.is_authenticated());
    assert_eq!(store.load().as_deref(), Some(SAMPLE));
}

#[test]
fn login_without_role_claim_reports_no_role() {
    let mut session = booted(&MemoryTokenStore::new());
    let role = session.login(&fresh("8", None)).expect("login").role.clone();
    assert_eq!(role, None);
    assert!(session.is_authenticated());
}

#[test]
fn login_skips_expiry_check() {
    let mut session = booted(&MemoryTokenStore::new());
    session.login(&expired("2", Some("User"))).expect("login");
    assert_eq!(session.phase(), Phase::Authenticated);
}

#[test]
fn login_completes_pending_bootstrap() {
    let mut session = AuthSession::new(MemoryTokenStore::new());
    session.login(SAMPLE).expect("login");
    assert!(!session.is_loading());
    assert_eq!(session.bootstrap(NOW_MS), Phase::Authenticated);
}

#[test]
fn login_with_undecodable_credential_changes_nothing() {
    let store = MemoryTokenStore::new();
    let mut session = booted(&store);
    assert!(session.login("header.bm90IGpzb24=.sig").is_err());
    assert_eq!(session.phase(), Phase::Anonymous);
    assert_eq!(store.load(), None);
}

#[test]
fn logout_clears_state_and_storage() {
    let store = MemoryTokenStore::new();
    let mut session = booted(&store);
    session.login(SAMPLE).expect("login");
    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.identity().is_none());
    assert!(session.credential().is_none());
    assert_eq!(store.load(), None);
    assert_eq!(session.phase(), Phase::Anonymous);
}

#[test]
fn logout_is_idempotent() {
    let store = MemoryTokenStore::new();
    let mut session = booted(&store);
    session.logout();
    session.logout();
    assert_eq!(session.snapshot(), SessionState::anonymous());
}

// =============================================================
// Reload scenarios
// =============================================================

#[test]
fn login_survives_simulated_reload() {
    let store = MemoryTokenStore::new();
    let mut first = booted(&store);
    first.login(SAMPLE).expect("login");

    let reloaded = booted(&store);
    assert_eq!(reloaded.snapshot(), first.snapshot());
    assert_eq!(reloaded.identity(), Some(&Identity { id: 5, role: Some(Role::Admin) }));
}

#[test]
fn logout_in_one_tab_is_not_seen_by_another_until_reload() {
    let store = MemoryTokenStore::seeded(SAMPLE);
    let mut tab_a = booted(&store);
    let tab_b = booted(&store);
    tab_a.logout();
    assert!(tab_b.is_authenticated());
    assert!(!booted(&store).is_authenticated());
}

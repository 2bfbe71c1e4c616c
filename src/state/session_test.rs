use super::*;
use crate::util::storage::MemoryStorage;

fn stored_response() -> AuthResponse {
    AuthResponse {
        token: "t1".to_owned(),
        user: User {
            id: 2,
            email: "a@b.com".to_owned(),
        },
    }
}

// =============================================================
// Construction and hydration
// =============================================================

#[test]
fn new_session_is_loading_and_unauthenticated() {
    let state = SessionState::new();
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
}

#[test]
fn hydrate_with_empty_storage_ends_unauthenticated() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();

    state.hydrate(&storage);

    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
}

#[test]
fn hydrate_with_stored_record_restores_session() {
    let storage = MemoryStorage::new();
    storage.seed_raw(Some("abc"), Some(r#"{"id":1,"email":"a@b.com"}"#));
    let mut state = SessionState::new();

    state.hydrate(&storage);

    assert!(!state.is_loading());
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("abc"));
    assert_eq!(state.user().map(|u| u.id), Some(1));
    assert_eq!(state.user().map(|u| u.email.as_str()), Some("a@b.com"));
}

#[test]
fn hydrate_with_corrupt_record_clears_storage_and_stays_signed_out() {
    let storage = MemoryStorage::new();
    storage.seed_raw(Some("abc"), Some("not json"));
    let mut state = SessionState::new();

    state.hydrate(&storage);

    assert!(!state.is_loading());
    assert!(!state.is_authenticated());
    assert_eq!(storage.raw(), (None, None));
}

#[test]
fn hydrate_twice_is_a_no_op() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();
    state.hydrate(&storage);

    // Logging in after hydration must survive a stray second hydrate call.
    state.commit_login(stored_response(), &storage);
    state.hydrate(&storage);

    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("t1"));
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn commit_login_sets_session_and_writes_storage() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();
    state.hydrate(&storage);

    state.commit_login(stored_response(), &storage);

    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("t1"));
    assert_eq!(state.user().map(|u| u.id), Some(2));

    // Storage mirrors the in-memory session.
    let record = storage.read().expect("record persisted");
    assert_eq!(record.token, "t1");
    assert_eq!(record.user.email, "a@b.com");
}

#[test]
fn logout_clears_session_and_storage() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();
    state.hydrate(&storage);
    state.commit_login(stored_response(), &storage);

    state.logout(&storage);

    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(storage.read().is_none());
}

#[test]
fn logout_is_idempotent() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();
    state.hydrate(&storage);
    state.commit_login(stored_response(), &storage);

    state.logout(&storage);
    let after_first = state.clone();
    state.logout(&storage);

    assert_eq!(state, after_first);
    assert!(storage.read().is_none());
}

#[test]
fn logout_when_signed_out_is_a_no_op() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();
    state.hydrate(&storage);

    state.logout(&storage);

    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
}

// =============================================================
// Invariants
// =============================================================

#[test]
fn token_and_user_are_always_both_present_or_both_absent() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();
    assert_eq!(state.token().is_some(), state.user().is_some());

    state.hydrate(&storage);
    assert_eq!(state.token().is_some(), state.user().is_some());

    state.commit_login(stored_response(), &storage);
    assert_eq!(state.token().is_some(), state.user().is_some());

    state.logout(&storage);
    assert_eq!(state.token().is_some(), state.user().is_some());
}

#[test]
fn loading_never_returns_after_hydration() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();
    state.hydrate(&storage);

    state.commit_login(stored_response(), &storage);
    assert!(!state.is_loading());
    state.logout(&storage);
    assert!(!state.is_loading());
}

use super::*;
use crate::util::storage::MemoryStorage;

// =============================================================
// Route decision table
// =============================================================

#[test]
fn hydrating_session_yields_pending() {
    let state = SessionState::new();
    assert_eq!(decide(&state), RouteDecision::Pending);
}

#[test]
fn pending_wins_even_if_a_record_would_authenticate() {
    // A session that has not finished hydrating must never render or
    // redirect, regardless of what storage holds.
    let storage = MemoryStorage::new();
    storage.seed_raw(Some("abc"), Some(r#"{"id":1,"email":"a@b.com"}"#));
    let state = SessionState::new();
    assert_eq!(decide(&state), RouteDecision::Pending);
}

#[test]
fn unauthenticated_session_redirects_to_sign_in() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();
    state.hydrate(&storage);
    assert_eq!(decide(&state), RouteDecision::RedirectToSignIn);
}

#[test]
fn authenticated_session_renders_content() {
    let storage = MemoryStorage::new();
    storage.seed_raw(Some("abc"), Some(r#"{"id":1,"email":"a@b.com"}"#));
    let mut state = SessionState::new();
    state.hydrate(&storage);
    assert_eq!(decide(&state), RouteDecision::Render);
}

#[test]
fn decision_is_stable_across_repeated_evaluation() {
    let storage = MemoryStorage::new();
    let mut state = SessionState::new();
    state.hydrate(&storage);
    let first = decide(&state);
    assert_eq!(decide(&state), first);
    assert_eq!(decide(&state), first);
}

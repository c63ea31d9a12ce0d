use std::sync::atomic::AtomicBool;

use super::*;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "test@example.com".to_owned(),
    }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_session_is_empty_and_loading() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn establish_sets_token_and_user_together() {
    let mut state = SessionState::default();
    state.establish("tok-1".to_owned(), user());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user, Some(user()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn clear_after_establish_leaves_session_empty() {
    let mut state = SessionState::default();
    state.establish("tok-1".to_owned(), user());
    state.clear();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn token_without_user_is_not_authenticated() {
    let state = SessionState {
        token: Some("tok-1".to_owned()),
        user: None,
        loading: false,
    };
    assert!(!state.is_authenticated());
}

// =============================================================
// Durable-storage encoding
// =============================================================

#[test]
fn user_encoding_round_trips() {
    // Establish-then-restore hinges on this encoding surviving a reload.
    let original = user();
    let decoded = decode_user(&encode_user(&original)).expect("decode");
    assert_eq!(decoded, original);
}

#[test]
fn decode_user_rejects_garbage() {
    assert!(decode_user("not json").is_none());
    assert!(decode_user("{}").is_none());
    assert!(decode_user("").is_none());
}

// =============================================================
// Cookie directives
// =============================================================

#[test]
fn establish_cookie_carries_token_path_and_expiry() {
    let cookie = establish_cookie("tok-9");
    assert_eq!(cookie, "auth_token=tok-9; path=/; max-age=604800");
}

#[test]
fn expire_cookie_zeroes_max_age() {
    assert_eq!(expire_cookie(), "auth_token=; path=/; max-age=0");
}

#[test]
fn guard_and_store_share_one_cookie_name() {
    assert_eq!(AUTH_COOKIE, "auth_token");
    assert!(establish_cookie("t").starts_with(AUTH_COOKIE));
    assert!(expire_cookie().starts_with(AUTH_COOKIE));
}

// =============================================================
// Unauthorized teardown latch
// =============================================================

#[test]
fn teardown_latch_fires_exactly_once() {
    let latch = AtomicBool::new(false);
    assert!(begin_teardown(&latch));
    assert!(!begin_teardown(&latch));
    assert!(!begin_teardown(&latch));
}

#[test]
fn teardown_latch_single_winner_across_simultaneous_failures() {
    // Several in-flight calls all failing with 401 must produce exactly one
    // clear + redirect.
    let latch = AtomicBool::new(false);
    let winners = (0..8).filter(|_| begin_teardown(&latch)).count();
    assert_eq!(winners, 1);
}

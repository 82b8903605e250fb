use super::*;
use serde_json::json;
use session::{Session, UserSummary};

fn user(value: serde_json::Value) -> UserSummary {
    UserSummary::new(value).unwrap()
}

#[test]
fn status_text_while_pending() {
    assert_eq!(status_text(&AuthStateStore::new()), "Checking session...");
}

#[test]
fn status_text_logged_out() {
    let mut store = AuthStateStore::new();
    store.apply_probe(Session::empty());
    assert_eq!(status_text(&store), "Not logged in");
}

#[test]
fn status_text_names_user_when_username_present() {
    let mut store = AuthStateStore::new();
    store.apply_login(Session::authenticated(user(json!({ "id": 1, "username": "ann" }))));
    assert_eq!(status_text(&store), "Logged in as ann");
}

#[test]
fn status_text_without_username_is_generic() {
    let mut store = AuthStateStore::new();
    store.apply_login(Session::authenticated(user(json!({ "id": 7 }))));
    assert_eq!(status_text(&store), "Logged in");
}

use super::*;
use crate::fake::ScriptedTransport;
use crate::store::AuthStateStore;
use crate::transport::{Method, TransportError};
use serde_json::json;

// =============================================================
// interpret_status
// =============================================================

#[test]
fn logged_in_true_yields_user() {
    let session = interpret_status(&Response::ok(json!({
        "logged_in": true,
        "user": { "id": 1, "username": "ann" }
    })))
    .unwrap();
    assert!(session.logged_in());
    assert_eq!(session.user().map(UserSummary::as_value), Some(&json!({ "id": 1, "username": "ann" })));
}

#[test]
fn logged_in_false_yields_empty() {
    assert_eq!(interpret_status(&Response::ok(json!({ "logged_in": false }))), Ok(Session::empty()));
}

#[test]
fn logged_in_true_without_user_is_indeterminate() {
    let err = interpret_status(&Response::ok(json!({ "logged_in": true }))).unwrap_err();
    assert!(matches!(err, AuthError::SessionIndeterminate(_)));

    let err = interpret_status(&Response::ok(json!({ "logged_in": true, "user": {} }))).unwrap_err();
    assert!(matches!(err, AuthError::SessionIndeterminate(_)));
}

#[test]
fn logged_in_true_with_non_object_user_is_indeterminate() {
    for user in [json!(false), json!(""), json!([]), json!(0)] {
        let response = Response::ok(json!({ "logged_in": true, "user": user }));
        assert!(
            matches!(interpret_status(&response), Err(AuthError::SessionIndeterminate(_))),
            "user {user} was accepted"
        );
    }
}

#[tokio::test]
async fn scalar_user_fails_closed() {
    let transport = ScriptedTransport::json([json!({ "logged_in": true, "user": false })]);
    let session = SessionProbe::new(&transport).probe().await;
    assert!(!session.logged_in());
}

#[test]
fn server_error_status_is_indeterminate() {
    let response = Response { status: 500, body: json!({ "logged_in": true, "user": { "id": 1 } }) };
    assert!(matches!(interpret_status(&response), Err(AuthError::SessionIndeterminate(_))));
}

#[test]
fn missing_flag_is_indeterminate() {
    assert!(matches!(
        interpret_status(&Response::ok(json!({ "user": { "id": 1 } }))),
        Err(AuthError::SessionIndeterminate(_))
    ));
}

// =============================================================
// probe (fail-closed)
// =============================================================

#[tokio::test]
async fn probe_sends_one_get_to_logged_in() {
    let transport = ScriptedTransport::json([json!({ "logged_in": false })]);
    let probe = SessionProbe::new(&transport);
    probe.probe().await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path, "/logged_in");
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn probe_success_applies_user_exactly_once() {
    let transport = ScriptedTransport::json([json!({ "logged_in": true, "user": { "id": 1, "username": "ann" } })]);
    let mut store = AuthStateStore::new();

    let session = SessionProbe::new(&transport).probe().await;
    store.apply_probe(session);

    assert!(store.is_logged_in());
    assert_eq!(store.user().map(UserSummary::as_value), Some(&json!({ "id": 1, "username": "ann" })));
    assert_eq!(store.revision(), 1);
}

#[tokio::test]
async fn probe_transport_failure_fails_closed() {
    for failure in [
        TransportError::Network("connection refused".to_owned()),
        TransportError::Timeout(10_000),
        TransportError::Decode("expected value".to_owned()),
    ] {
        let transport = ScriptedTransport::new([Err(failure)]);
        let session = SessionProbe::new(&transport).probe().await;
        assert_eq!(session, Session::empty());
    }
}

#[tokio::test]
async fn probe_failure_resolves_pending_to_unauthenticated() {
    let transport = ScriptedTransport::new([Err(TransportError::Network("offline".to_owned()))]);
    let mut store = AuthStateStore::new();
    store.apply_probe(SessionProbe::new(&transport).probe().await);
    assert!(!store.is_pending());
    assert!(!store.is_logged_in());
}

#[tokio::test]
async fn try_probe_surfaces_transport_error() {
    let transport = ScriptedTransport::new([Err(TransportError::Timeout(5))]);
    let err = SessionProbe::new(&transport).try_probe().await.unwrap_err();
    assert_eq!(err, AuthError::TransportFailed(TransportError::Timeout(5)));
}

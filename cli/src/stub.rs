//! Test doubles: an in-process authority speaking the session contract, and
//! a canned transport for tests that do not need HTTP at all.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::routing::{delete, get, post};
use serde::Deserialize;
use serde_json::{Value, json};
use session::{Request, Response, Transport, TransportError};

const COOKIE_NAME: &str = "stub_session";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum StubMode {
    #[default]
    Normal,
    /// Every handler sleeps past any sane client timeout.
    Slow,
    /// `/logged_in` answers with an HTML page.
    Html,
}

#[derive(Default)]
struct StubState {
    mode: StubMode,
    users: Vec<(u64, String, String)>,
    sessions: HashMap<String, u64>,
    next_token: u64,
}

impl StubState {
    fn user_json(&self, id: u64) -> Value {
        let name = self
            .users
            .iter()
            .find(|(uid, _, _)| *uid == id)
            .map(|(_, name, _)| name.clone())
            .unwrap_or_default();
        json!({ "id": id, "username": name })
    }

    fn open_session(&mut self, user_id: u64) -> String {
        self.next_token += 1;
        let token = format!("tok{}", self.next_token);
        self.sessions.insert(token.clone(), user_id);
        token
    }
}

type Shared = Arc<Mutex<StubState>>;

pub(crate) struct StubAuthority {
    pub(crate) base_url: String,
    state: Shared,
}

impl StubAuthority {
    pub(crate) async fn spawn(mode: StubMode) -> Self {
        let state: Shared = Arc::new(Mutex::new(StubState { mode, ..StubState::default() }));
        let app = Router::new()
            .route("/logged_in", get(logged_in))
            .route("/login", post(login))
            .route("/users", post(signup))
            .route("/logout", delete(logout))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { base_url: format!("http://{addr}"), state }
    }

    /// Register a user directly and return a valid session cookie for them.
    pub(crate) fn seed_session(&self, username: &str, password: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let id = state.users.len() as u64 + 1;
        state.users.push((id, username.to_owned(), password.to_owned()));
        let token = state.open_session(id);
        format!("{COOKIE_NAME}={token}")
    }

    pub(crate) fn session_count(&self) -> usize {
        self.state.lock().unwrap().sessions.len()
    }
}

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
    password_confirmation: Option<String>,
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .filter_map(|pair| pair.trim().strip_prefix(&format!("{COOKIE_NAME}=")).map(ToOwned::to_owned))
        .next()
}

fn set_cookie(token: &str) -> [(header::HeaderName, String); 1] {
    [(header::SET_COOKIE, format!("{COOKIE_NAME}={token}; Path=/; HttpOnly"))]
}

async fn pause_if_slow(state: &Shared) {
    let slow = state.lock().unwrap().mode == StubMode::Slow;
    if slow {
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
}

async fn logged_in(State(state): State<Shared>, headers: HeaderMap) -> HttpResponse {
    pause_if_slow(&state).await;
    let state = state.lock().unwrap();
    if state.mode == StubMode::Html {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    match session_token(&headers).and_then(|token| state.sessions.get(&token).copied()) {
        Some(id) => Json(json!({ "logged_in": true, "user": state.user_json(id) })).into_response(),
        None => Json(json!({ "logged_in": false })).into_response(),
    }
}

async fn login(State(state): State<Shared>, Json(creds): Json<Credentials>) -> HttpResponse {
    pause_if_slow(&state).await;
    let mut state = state.lock().unwrap();
    let found = state
        .users
        .iter()
        .find(|(_, name, password)| *name == creds.username && *password == creds.password)
        .map(|(id, _, _)| *id);
    match found {
        Some(id) => {
            let token = state.open_session(id);
            (set_cookie(&token), Json(json!({ "logged_in": true, "user": state.user_json(id) }))).into_response()
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "logged_in": false, "errors": ["invalid credentials"] })),
        )
            .into_response(),
    }
}

async fn signup(State(state): State<Shared>, Json(creds): Json<Credentials>) -> HttpResponse {
    pause_if_slow(&state).await;
    let mut state = state.lock().unwrap();
    let mut errors = Vec::new();
    if state.users.iter().any(|(_, name, _)| *name == creds.username) {
        errors.push("Username has already been taken");
    }
    if creds.password_confirmation.as_deref().is_some_and(|c| c != creds.password) {
        errors.push("Password confirmation doesn't match Password");
    }
    if !errors.is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "status": "error", "errors": errors })))
            .into_response();
    }
    let id = state.users.len() as u64 + 1;
    state.users.push((id, creds.username, creds.password));
    let token = state.open_session(id);
    (set_cookie(&token), Json(json!({ "status": "created", "user": state.user_json(id) }))).into_response()
}

async fn logout(State(state): State<Shared>, headers: HeaderMap) -> HttpResponse {
    pause_if_slow(&state).await;
    if let Some(token) = session_token(&headers) {
        state.lock().unwrap().sessions.remove(&token);
    }
    (
        [(header::SET_COOKIE, format!("{COOKIE_NAME}=; Path=/; Max-Age=0"))],
        Json(json!({ "logged_out": true })),
    )
        .into_response()
}

/// Replies from a fixed queue without any I/O.
pub(crate) struct CannedTransport {
    replies: RefCell<VecDeque<Value>>,
}

impl CannedTransport {
    pub(crate) fn new(replies: impl IntoIterator<Item = Value>) -> Self {
        Self { replies: RefCell::new(replies.into_iter().collect()) }
    }
}

#[async_trait(?Send)]
impl Transport for CannedTransport {
    async fn send(&self, _request: Request) -> Result<Response, TransportError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .map(Response::ok)
            .ok_or_else(|| TransportError::Network("no canned reply".to_owned()))
    }
}

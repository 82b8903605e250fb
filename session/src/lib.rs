//! Client-side session state machine for a cookie-authenticated API.
//!
//! This crate owns the logic shared by the browser `client` and the native
//! `cli`: it decides whether the user is logged in, reconciles that belief
//! with the remote authority on startup, and feeds login/signup/logout results
//! into a single store. HTTP itself stays behind the [`transport::Transport`]
//! trait so the same state machine runs on `wasm32` and on tokio.
//!
//! SYSTEM CONTEXT
//! ==============
//! `probe` runs once at startup, `submit` runs on form actions, `logout` on the
//! log-out action. All three produce values that only `store` may write.
//! `route` reads the store to pick a view and never writes it.

pub mod client;
pub mod config;
pub mod error;
pub mod logout;
pub mod probe;
pub mod route;
pub mod store;
pub mod submit;
pub mod transport;
pub mod types;
mod wire;

#[cfg(test)]
mod fake;

pub use client::{AuthClient, FormKind};
pub use config::ClientConfig;
pub use error::AuthError;
pub use route::{NavLink, NavTarget, Route, View};
pub use store::{AuthPhase, AuthStateStore};
pub use submit::{CredentialSubmitter, FormState, Outcome, SubmitTarget};
pub use transport::{Method, Request, Response, Transport, TransportError};
pub use types::{CredentialForm, ErrorSet, Session, UserSummary};

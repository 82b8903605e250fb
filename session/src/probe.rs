//! Startup reconciliation with the remote authority.
//!
//! ERROR HANDLING
//! ==============
//! Fail closed: any answer other than an explicit `logged_in: true` with a
//! usable user resolves to the empty session. Failures are reported, never
//! propagated, so startup cannot hang or crash on a bad probe.

#[cfg(test)]
#[path = "probe_test.rs"]
mod probe_test;

use crate::error::AuthError;
use crate::transport::{Request, Response, SESSION_STATUS_PATH, Transport};
use crate::types::{Session, UserSummary};
use crate::wire::AuthBody;

pub struct SessionProbe<T> {
    transport: T,
}

impl<T: Transport> SessionProbe<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Ask `GET /logged_in` for the current session, defaulting to logged out.
    pub async fn probe(&self) -> Session {
        match self.try_probe().await {
            Ok(session) => {
                tracing::debug!(logged_in = session.logged_in(), "session probe resolved");
                session
            }
            Err(error) => {
                error.report("probe");
                Session::empty()
            }
        }
    }

    /// Like [`probe`](Self::probe) but exposes why the answer was unclear.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TransportFailed`] if the request did not complete and
    /// [`AuthError::SessionIndeterminate`] if the response was not a clear answer.
    pub async fn try_probe(&self) -> Result<Session, AuthError> {
        let response = self.transport.send(Request::get(SESSION_STATUS_PATH)).await?;
        interpret_status(&response)
    }
}

/// Map a `/logged_in` response to a session.
///
/// # Errors
///
/// Returns [`AuthError::SessionIndeterminate`] for non-2xx statuses, bodies
/// without a boolean `logged_in`, and `logged_in: true` without a user.
pub fn interpret_status(response: &Response) -> Result<Session, AuthError> {
    if !response.is_success() {
        return Err(AuthError::SessionIndeterminate(format!("status {}", response.status)));
    }
    let body = AuthBody::parse(&response.body).map_err(|e| AuthError::SessionIndeterminate(e.to_string()))?;
    match body.logged_in {
        Some(true) => body
            .user
            .and_then(UserSummary::new)
            .map(Session::authenticated)
            .ok_or_else(|| AuthError::SessionIndeterminate("logged_in without user".to_owned())),
        Some(false) => Ok(Session::empty()),
        None => Err(AuthError::SessionIndeterminate("missing logged_in".to_owned())),
    }
}

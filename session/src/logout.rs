//! Server-driven logout with a local fallback.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use crate::error::AuthError;
use crate::store::AuthStateStore;
use crate::transport::{LOGOUT_PATH, Request, Transport, TransportError};

/// Ask the authority to end the session via `DELETE /logout`.
///
/// # Errors
///
/// Returns [`AuthError::TransportFailed`] if the request fails or the status is not 2xx.
pub async fn terminate<T: Transport>(transport: T) -> Result<(), AuthError> {
    let response = transport.send(Request::delete(LOGOUT_PATH)).await?;
    if !response.is_success() {
        return Err(TransportError::Status(response.status).into());
    }
    Ok(())
}

/// End the server session, then clear local state whatever the server said.
///
/// Returns the server-side failure, if any, after it has been reported. The
/// store is empty when this returns either way.
pub async fn logout<T: Transport>(transport: T, store: &mut AuthStateStore) -> Option<AuthError> {
    let result = terminate(transport).await;
    store.apply_logout();
    match result {
        Ok(()) => {
            tracing::info!("logged out");
            None
        }
        Err(error) => {
            error.report("logout");
            Some(error)
        }
    }
}

//! Failure taxonomy for authentication flows.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Every variant degrades to an unauthenticated,
//! retryable UI state, and every failure goes through [`AuthError::report`]
//! so front ends surface them uniformly.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::transport::TransportError;
use crate::types::ErrorSet;

/// Message shown to the user when a request could not complete.
pub const RETRY_NOTICE: &str = "Something went wrong reaching the server. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server explicitly rejected the submitted form.
    #[error("submission rejected: {0}")]
    ValidationRejected(ErrorSet),

    /// The request could not complete.
    #[error("transport failed: {0}")]
    TransportFailed(#[from] TransportError),

    /// The session probe did not get a clear answer.
    #[error("session indeterminate: {0}")]
    SessionIndeterminate(String),
}

impl AuthError {
    /// Emit one structured log event for this failure.
    pub fn report(&self, operation: &'static str) {
        match self {
            Self::ValidationRejected(errors) => {
                tracing::info!(operation, count = errors.len(), errors = %errors, "submission rejected");
            }
            Self::TransportFailed(error) => {
                tracing::warn!(operation, error = %error, "transport failed");
            }
            Self::SessionIndeterminate(reason) => {
                tracing::warn!(operation, reason = %reason, "session indeterminate; treating as logged out");
            }
        }
    }

    /// Text a form should display for this failure, if any.
    ///
    /// Validation errors are rendered item by item from the `ErrorSet`, so
    /// only the other variants produce a notice.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::ValidationRejected(_) => None,
            Self::TransportFailed(_) | Self::SessionIndeterminate(_) => Some(RETRY_NOTICE),
        }
    }
}

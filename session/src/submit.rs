//! Credential submission shared by the login and signup forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`CredentialSubmitter`] is parameterized by a [`SubmitTarget`]: the
//! endpoint, the method, and the marker that means "authenticated". It sends
//! exactly one request per `submit` and never touches the store itself; the
//! caller feeds the resulting [`Outcome`] into the store and the form.
//!
//! CONCURRENCY
//! ===========
//! [`FormState::begin_submit`] refuses to start a second submission while one
//! is outstanding. Outcomes from different forms can still interleave; they
//! are applied in arrival order, so the last one applied wins.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::error::{AuthError, RETRY_NOTICE};
use crate::route::Route;
use crate::store::AuthStateStore;
use crate::transport::{LOGIN_PATH, Method, Request, Response, SIGNUP_PATH, Transport, TransportError};
use crate::types::{CredentialForm, ErrorSet, Session, UserSummary};
use crate::wire::AuthBody;

/// Field of the response body that signals success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessMarker {
    /// `logged_in == true`
    LoggedIn,
    /// `status == "created"`
    StatusCreated,
}

impl SuccessMarker {
    fn matches(self, body: &AuthBody) -> bool {
        match self {
            Self::LoggedIn => body.logged_in == Some(true),
            Self::StatusCreated => body.status.as_deref() == Some("created"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTarget {
    /// Operation name used in logs.
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub success: SuccessMarker,
}

pub const LOGIN: SubmitTarget = SubmitTarget {
    name: "login",
    method: Method::Post,
    path: LOGIN_PATH,
    success: SuccessMarker::LoggedIn,
};

pub const SIGNUP: SubmitTarget = SubmitTarget {
    name: "signup",
    method: Method::Post,
    path: SIGNUP_PATH,
    success: SuccessMarker::StatusCreated,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Authenticated(Session),
    Rejected(ErrorSet),
    TransportFailed(TransportError),
}

impl Outcome {
    /// The failure this outcome represents, if any.
    #[must_use]
    pub fn error(&self) -> Option<AuthError> {
        match self {
            Self::Authenticated(_) => None,
            Self::Rejected(errors) => Some(AuthError::ValidationRejected(errors.clone())),
            Self::TransportFailed(error) => Some(AuthError::TransportFailed(error.clone())),
        }
    }

    /// Write an authenticated session into the store.
    ///
    /// Returns the route to navigate to; only `Authenticated` navigates.
    pub fn apply_to_store(&self, store: &mut AuthStateStore) -> Option<Route> {
        match self {
            Self::Authenticated(session) => {
                store.apply_login(session.clone());
                Some(Route::Home)
            }
            Self::Rejected(_) | Self::TransportFailed(_) => None,
        }
    }

    /// Resolve `form` and the store with this outcome.
    pub fn apply(&self, store: &mut AuthStateStore, form: &mut FormState) -> Option<Route> {
        form.resolve(self);
        self.apply_to_store(store)
    }
}

pub struct CredentialSubmitter<T> {
    transport: T,
    target: SubmitTarget,
}

impl<T: Transport> CredentialSubmitter<T> {
    pub fn new(transport: T, target: SubmitTarget) -> Self {
        Self { transport, target }
    }

    #[must_use]
    pub fn target(&self) -> SubmitTarget {
        self.target
    }

    /// Send `form` to the target endpoint and interpret the reply.
    ///
    /// Performs exactly one request. Failures are reported before returning.
    pub async fn submit(&self, form: &CredentialForm) -> Outcome {
        tracing::info!(operation = self.target.name, path = self.target.path, username = %form.username, "submitting credentials");
        let outcome = match serde_json::to_value(form) {
            Ok(body) => {
                let request = Request::with_body(self.target.method, self.target.path, body);
                match self.transport.send(request).await {
                    Ok(response) => interpret_submission(self.target, &response),
                    Err(error) => Outcome::TransportFailed(error),
                }
            }
            Err(error) => Outcome::TransportFailed(TransportError::Decode(error.to_string())),
        };
        match outcome.error() {
            Some(error) => error.report(self.target.name),
            None => tracing::info!(operation = self.target.name, "credentials accepted"),
        }
        outcome
    }
}

/// Map a submission response to an [`Outcome`].
///
/// A success marker without a usable user is a malformed response, not a
/// login. A non-2xx response without a marker or any messages is a transport
/// failure rather than an empty rejection.
#[must_use]
pub fn interpret_submission(target: SubmitTarget, response: &Response) -> Outcome {
    let body = match AuthBody::parse(&response.body) {
        Ok(body) => body,
        Err(error) => return Outcome::TransportFailed(TransportError::Decode(error.to_string())),
    };
    if target.success.matches(&body) {
        return match body.user.and_then(UserSummary::new) {
            Some(user) => Outcome::Authenticated(Session::authenticated(user)),
            None => Outcome::TransportFailed(TransportError::Decode("success response without user".to_owned())),
        };
    }
    if body.errors.is_empty() && !response.is_success() {
        return Outcome::TransportFailed(TransportError::Status(response.status));
    }
    Outcome::Rejected(body.errors)
}

/// Per-form state: current fields, displayed errors, and the in-flight guard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: CredentialForm,
    errors: ErrorSet,
    notice: Option<&'static str>,
    in_flight: bool,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form that also collects a password confirmation (signup).
    #[must_use]
    pub fn with_confirmation() -> Self {
        Self {
            fields: CredentialForm::default().with_confirmation(""),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Generic retryable message after a transport failure.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a submission, returning the fields to send.
    ///
    /// Returns `None` while a previous submission is outstanding.
    pub fn begin_submit(&mut self) -> Option<CredentialForm> {
        if self.in_flight {
            tracing::debug!("ignoring resubmit while request is in flight");
            return None;
        }
        self.in_flight = true;
        self.notice = None;
        Some(self.fields.clone())
    }

    /// Record the outcome of the outstanding submission.
    pub fn resolve(&mut self, outcome: &Outcome) {
        self.in_flight = false;
        match outcome {
            Outcome::Authenticated(_) => {
                self.errors.clear();
                self.notice = None;
                self.fields.clear();
            }
            Outcome::Rejected(errors) => {
                self.errors = errors.clone();
                self.notice = None;
            }
            Outcome::TransportFailed(_) => {
                self.notice = Some(RETRY_NOTICE);
            }
        }
    }

    /// Discard everything when the user navigates away from the form.
    pub fn abandon(&mut self) {
        self.fields.clear();
        self.errors.clear();
        self.notice = None;
        self.in_flight = false;
    }
}

//! Single source of truth for the client's authentication state.
//!
//! DESIGN
//! ======
//! The store is a plain value written only through `&mut self`, so whoever
//! owns it (an `AuthClient`, or one Leptos `RwSignal`) is the single writer.
//! Every write replaces the whole phase; outcomes are applied in the order
//! they arrive, so the last response applied wins.
//!
//! `Pending` exists only until the first probe, login, or logout is applied.
//! It reads as logged out through [`AuthStateStore::session`] so callers that
//! only ask "logged in?" never treat an unfinished probe as authenticated.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::types::{Session, UserSummary};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Startup, before the session probe resolved.
    #[default]
    Pending,
    Unauthenticated,
    Authenticated(UserSummary),
}

impl AuthPhase {
    fn from_session(session: Session) -> Self {
        match session.into_user() {
            Some(user) => Self::Authenticated(user),
            None => Self::Unauthenticated,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated(_) => "authenticated",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthStateStore {
    phase: AuthPhase,
    revision: u64,
}

impl AuthStateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    /// Current session; `Pending` reads as the empty session.
    #[must_use]
    pub fn session(&self) -> Session {
        match &self.phase {
            AuthPhase::Authenticated(user) => Session::authenticated(user.clone()),
            AuthPhase::Pending | AuthPhase::Unauthenticated => Session::empty(),
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self.phase, AuthPhase::Authenticated(_))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, AuthPhase::Pending)
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserSummary> {
        match &self.phase {
            AuthPhase::Authenticated(user) => Some(user),
            AuthPhase::Pending | AuthPhase::Unauthenticated => None,
        }
    }

    /// Number of writes that changed the stored value.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Store `session` as the current state. Returns whether anything changed.
    pub fn apply_login(&mut self, session: Session) -> bool {
        self.replace(AuthPhase::from_session(session), "login")
    }

    /// Store the empty session. Repeated calls are no-ops.
    pub fn apply_logout(&mut self) -> bool {
        self.replace(AuthPhase::Unauthenticated, "logout")
    }

    /// Store the startup probe result, resolving `Pending`.
    pub fn apply_probe(&mut self, session: Session) -> bool {
        self.replace(AuthPhase::from_session(session), "probe")
    }

    fn replace(&mut self, next: AuthPhase, cause: &'static str) -> bool {
        if self.phase == next {
            tracing::debug!(cause, phase = next.label(), "auth state unchanged");
            return false;
        }
        tracing::info!(cause, from = self.phase.label(), to = next.label(), "auth state transition");
        self.phase = next;
        self.revision = self.revision.saturating_add(1);
        true
    }
}

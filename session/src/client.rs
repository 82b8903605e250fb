//! Whole-flow facade for front ends that own the session end to end.
//!
//! SYSTEM CONTEXT
//! ==============
//! The CLI drives everything through one `AuthClient`. The browser client
//! composes the same pieces (`probe`, `submit`, `logout`) around signals
//! instead, because Leptos owns the store there.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use crate::error::AuthError;
use crate::logout;
use crate::probe::SessionProbe;
use crate::route::{self, NavLink, Route, View};
use crate::store::AuthStateStore;
use crate::submit::{CredentialSubmitter, FormState, LOGIN, Outcome, SIGNUP, SubmitTarget};
use crate::transport::Transport;
use crate::types::CredentialForm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Signup,
}

impl FormKind {
    #[must_use]
    pub fn target(self) -> SubmitTarget {
        match self {
            Self::Login => LOGIN,
            Self::Signup => SIGNUP,
        }
    }

    #[must_use]
    pub fn route(self) -> Route {
        match self {
            Self::Login => Route::Login,
            Self::Signup => Route::Signup,
        }
    }
}

pub struct AuthClient<T> {
    transport: T,
    store: AuthStateStore,
    login_form: FormState,
    signup_form: FormState,
    location: Route,
    probed: bool,
}

impl<T: Transport> AuthClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            store: AuthStateStore::new(),
            login_form: FormState::new(),
            signup_form: FormState::with_confirmation(),
            location: Route::Home,
            probed: false,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn store(&self) -> &AuthStateStore {
        &self.store
    }

    #[must_use]
    pub fn form(&self, kind: FormKind) -> &FormState {
        match kind {
            FormKind::Login => &self.login_form,
            FormKind::Signup => &self.signup_form,
        }
    }

    #[must_use]
    pub fn location(&self) -> Route {
        self.location
    }

    /// Probe the authority once. Returns `false` if it already ran.
    pub async fn start(&mut self) -> bool {
        if self.probed {
            return false;
        }
        self.probed = true;
        let session = SessionProbe::new(&self.transport).probe().await;
        self.store.apply_probe(session);
        true
    }

    /// Submit the login form with `fields`.
    ///
    /// Returns `None` when a login is already in flight.
    pub async fn login(&mut self, fields: CredentialForm) -> Option<Outcome> {
        self.submit(FormKind::Login, fields).await
    }

    /// Submit the signup form with `fields`.
    pub async fn signup(&mut self, fields: CredentialForm) -> Option<Outcome> {
        self.submit(FormKind::Signup, fields).await
    }

    async fn submit(&mut self, kind: FormKind, fields: CredentialForm) -> Option<Outcome> {
        self.navigate(kind.route());
        let form = match kind {
            FormKind::Login => &mut self.login_form,
            FormKind::Signup => &mut self.signup_form,
        };
        form.fields = fields;
        let snapshot = form.begin_submit()?;

        let outcome = CredentialSubmitter::new(&self.transport, kind.target())
            .submit(&snapshot)
            .await;

        let form = match kind {
            FormKind::Login => &mut self.login_form,
            FormKind::Signup => &mut self.signup_form,
        };
        if let Some(redirect) = outcome.apply(&mut self.store, form) {
            self.navigate(redirect);
        }
        Some(outcome)
    }

    /// End the session on the server and locally.
    pub async fn logout(&mut self) -> Option<AuthError> {
        let error = logout::logout(&self.transport, &mut self.store).await;
        self.navigate(Route::Home);
        error
    }

    /// Move to `route`, discarding the form being left.
    pub fn navigate(&mut self, route: Route) {
        if route == self.location {
            return;
        }
        match self.location {
            Route::Login => self.login_form.abandon(),
            Route::Signup => self.signup_form.abandon(),
            Route::Home => {}
        }
        tracing::debug!(from = self.location.path(), to = route.path(), "navigate");
        self.location = route;
    }

    #[must_use]
    pub fn view(&self, path: &str) -> View {
        route::resolve(self.store.phase(), path)
    }

    #[must_use]
    pub fn nav_links(&self) -> Vec<NavLink> {
        route::nav_links(&self.store)
    }
}

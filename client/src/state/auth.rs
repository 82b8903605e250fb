//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<AuthStateStore>`. Pages read it to pick what
//! to render; only the probe, form submissions, and the log-out action write
//! it, each through the store's own `apply_*` methods.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{AuthPhase, AuthStateStore, Transport};

/// Human-readable session line shown on the home page.
pub fn status_text(store: &AuthStateStore) -> String {
    match store.phase() {
        AuthPhase::Pending => "Checking session...".to_owned(),
        AuthPhase::Unauthenticated => "Not logged in".to_owned(),
        AuthPhase::Authenticated(user) => match user.as_value().get("username").and_then(|v| v.as_str()) {
            Some(name) => format!("Logged in as {name}"),
            None => "Logged in".to_owned(),
        },
    }
}

/// Probe the authority once and write the answer into `auth`.
///
/// The probe fails closed, so `auth` always leaves `Pending` once it settles.
pub fn install_session_probe<T>(auth: RwSignal<AuthStateStore>, transport: T)
where
    T: Transport + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let session = session::probe::SessionProbe::new(transport).probe().await;
        auth.update(|store| {
            store.apply_probe(session);
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, transport);
    }
}

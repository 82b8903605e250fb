//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and signup render through one form component; these helpers keep
//! its labels and link targets out of the `view!` markup so they can be
//! tested natively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{FormKind, NavTarget};

pub fn form_title(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Log In",
        FormKind::Signup => "Sign Up",
    }
}

/// Submit button label; switches while a request is in flight.
pub fn submit_label(kind: FormKind, in_flight: bool) -> &'static str {
    match (kind, in_flight) {
        (FormKind::Login, false) => "Log In",
        (FormKind::Login, true) => "Logging in...",
        (FormKind::Signup, false) => "Sign Up",
        (FormKind::Signup, true) => "Signing up...",
    }
}

/// `href` for a nav link; the log-out action has none.
pub fn link_href(target: NavTarget) -> Option<&'static str> {
    match target {
        NavTarget::Route(route) => Some(route.path()),
        NavTarget::Logout => None,
    }
}

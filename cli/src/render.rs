//! Plain-text rendering of the session views.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use session::route::nav_links;
use session::{AuthClient, AuthStateStore, FormKind, FormState, NavTarget, Transport, View};

pub(crate) fn render<T: Transport>(client: &AuthClient<T>, path: &str) -> String {
    match client.view(path) {
        View::Loading => "Checking session...".to_owned(),
        View::Home => render_home(client.store()),
        View::Login => render_form("Log In", client.form(FormKind::Login), Some(("Sign Up", "/signup"))),
        View::Signup => render_form("Sign Up", client.form(FormKind::Signup), None),
        View::NotFound => format!("Page not found: {path}"),
    }
}

pub(crate) fn status_line(store: &AuthStateStore) -> String {
    match store.user() {
        Some(user) => format!("Logged in as {user}"),
        None if store.is_pending() => "Checking session...".to_owned(),
        None => "Not logged in".to_owned(),
    }
}

fn render_home(store: &AuthStateStore) -> String {
    let mut out = status_line(store);
    for link in nav_links(store) {
        let target = match link.target {
            NavTarget::Route(route) => route.path(),
            NavTarget::Logout => "(logout)",
        };
        let _ = write!(out, "\n  [{}] {target}", link.label);
    }
    out
}

fn render_form(title: &str, form: &FormState, alternate: Option<(&str, &str)>) -> String {
    let mut out = format!("== {title} ==");
    if form.is_in_flight() {
        out.push_str("\n(submitting...)");
    }
    for error in form.errors() {
        let _ = write!(out, "\n  - {error}");
    }
    if let Some(notice) = form.notice() {
        let _ = write!(out, "\n! {notice}");
    }
    if let Some((label, path)) = alternate {
        let _ = write!(out, "\nor [{label}] {path}");
    }
    out
}

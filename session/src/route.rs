//! Path and auth-state to view mapping.
//!
//! Presentation only: reads the store, never decides or changes auth state.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::store::{AuthPhase, AuthStateStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Home, Self::Login, Self::Signup];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }

    /// Exact match on the path, ignoring a query string and one trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// Shown while the startup probe is outstanding.
    Loading,
    Home,
    Login,
    Signup,
    NotFound,
}

/// Pick the view for `path` given the current auth phase.
#[must_use]
pub fn resolve(phase: &AuthPhase, path: &str) -> View {
    if matches!(phase, AuthPhase::Pending) {
        return View::Loading;
    }
    match Route::from_path(path) {
        Some(Route::Home) => View::Home,
        Some(Route::Login) => View::Login,
        Some(Route::Signup) => View::Signup,
        None => View::NotFound,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Route(Route),
    /// Log out is an action, not a navigable route.
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

/// Entry points offered on the home view.
///
/// "Log In" and "Sign Up" are always present; "Log Out" only when logged in.
#[must_use]
pub fn nav_links(store: &AuthStateStore) -> Vec<NavLink> {
    let mut links = vec![
        NavLink { label: "Log In", target: NavTarget::Route(Route::Login) },
        NavLink { label: "Sign Up", target: NavTarget::Route(Route::Signup) },
    ];
    if store.is_logged_in() {
        links.push(NavLink { label: "Log Out", target: NavTarget::Logout });
    }
    links
}

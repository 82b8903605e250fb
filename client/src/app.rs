//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::AuthStateStore;

use crate::net::api::GlooTransport;
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth::install_session_probe;

/// Root application component.
///
/// Provides the auth store and transport contexts, probes the session once,
/// and holds every route behind a loading screen until that probe settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthStateStore::new());
    let transport = GlooTransport::from_build_env();

    provide_context(auth);
    provide_context(transport.clone());

    install_session_probe(auth, transport);

    view! {
        <Title text="Session"/>

        <Router>
            <Show
                when=move || !auth.with(AuthStateStore::is_pending)
                fallback=|| view! { <p class="loading">"Checking session..."</p> }
            >
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                </Routes>
            </Show>
        </Router>
    }
}

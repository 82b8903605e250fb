//! Home page: session status and entry points.

use leptos::prelude::*;
use session::AuthStateStore;

use crate::components::nav_bar::NavBar;
use crate::state::auth::status_text;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthStateStore>>();

    view! {
        <div class="home-page">
            <p class="home-page__status">{move || auth.with(status_text)}</p>
            <NavBar/>
        </div>
    }
}

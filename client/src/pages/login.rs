//! Login page with a link across to signup.

use leptos::prelude::*;
use session::{FormKind, Route};

use crate::components::auth_form::AuthForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <AuthForm kind=FormKind::Login/>
            <p class="login-page__alt">
                "or " <a href=Route::Signup.path()>"Sign Up"</a>
            </p>
        </div>
    }
}

//! Signup page.

use leptos::prelude::*;
use session::FormKind;

use crate::components::auth_form::AuthForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="signup-page">
            <AuthForm kind=FormKind::Signup/>
        </div>
    }
}

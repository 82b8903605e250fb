//! Username/email/password form shared by the login and signup pages.
//!
//! DESIGN
//! ======
//! Each mounted form owns an `RwSignal<FormState>`. `begin_submit` is the
//! double-submit guard: while a request is outstanding the button is
//! disabled and further submit events are ignored. The outcome is written to
//! the shared auth store first, then to the form, and only an authenticated
//! outcome navigates home. Leaving the page drops the form state with it.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{AuthStateStore, FormKind, FormState};

use crate::components::error_list::ErrorList;
use crate::net::api::GlooTransport;
use crate::util::auth::{form_title, submit_label};

#[component]
pub fn AuthForm(kind: FormKind) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthStateStore>>();
    let transport = expect_context::<GlooTransport>();
    let navigate = use_navigate();

    let form = RwSignal::new(match kind {
        FormKind::Login => FormState::new(),
        FormKind::Signup => FormState::with_confirmation(),
    });
    let in_flight = move || form.with(FormState::is_in_flight);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(fields) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let transport = transport.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let submitter = session::CredentialSubmitter::new(transport, kind.target());
                let outcome = submitter.submit(&fields).await;
                let next = auth.try_update(|store| outcome.apply_to_store(store)).flatten();
                // The form may be gone if the user navigated away meanwhile.
                form.try_update(|state| state.resolve(&outcome));
                if let Some(route) = next {
                    navigate(route.path(), NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (fields, &transport, &navigate, auth);
        }
    };

    view! {
        <form class="credential-form" on:submit=on_submit>
            <h1>{form_title(kind)}</h1>
            <input
                class="credential-input"
                type="text"
                name="username"
                placeholder="username"
                prop:value=move || form.with(|f| f.fields.username.clone())
                on:input=move |ev| form.update(|f| f.fields.username = event_target_value(&ev))
            />
            <input
                class="credential-input"
                type="email"
                name="email"
                placeholder="email"
                prop:value=move || form.with(|f| f.fields.email.clone())
                on:input=move |ev| form.update(|f| f.fields.email = event_target_value(&ev))
            />
            <input
                class="credential-input"
                type="password"
                name="password"
                placeholder="password"
                prop:value=move || form.with(|f| f.fields.password.clone())
                on:input=move |ev| form.update(|f| f.fields.password = event_target_value(&ev))
            />
            <Show when=move || kind == FormKind::Signup>
                <input
                    class="credential-input"
                    type="password"
                    name="password_confirmation"
                    placeholder="confirm password"
                    prop:value=move || form.with(|f| f.fields.password_confirmation.clone().unwrap_or_default())
                    on:input=move |ev| {
                        form.update(|f| f.fields.password_confirmation = Some(event_target_value(&ev)));
                    }
                />
            </Show>
            <button class="credential-submit" type="submit" disabled=in_flight>
                {move || submit_label(kind, in_flight())}
            </button>
            <ErrorList errors=Signal::derive(move || form.with(|f| f.errors().clone()))/>
            <Show when=move || form.with(|f| f.notice().is_some())>
                <p class="form-notice">{move || form.with(|f| f.notice().unwrap_or_default())}</p>
            </Show>
        </form>
    }
}

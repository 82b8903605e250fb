//! Validation error list: one `<li>` per message.

use leptos::prelude::*;
use session::ErrorSet;

#[component]
pub fn ErrorList(#[prop(into)] errors: Signal<ErrorSet>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| !e.is_empty())>
            <ul class="form-errors">
                {move || {
                    errors
                        .get()
                        .iter()
                        .map(|message| view! { <li>{message.clone()}</li> })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}

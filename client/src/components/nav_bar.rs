//! Entry-point links plus the log-out action.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Log In" and "Sign Up" are always offered; "Log Out" appears only while
//! the store holds an authenticated session.

use leptos::prelude::*;
use session::{AuthStateStore, NavLink, NavTarget, route::nav_links};

use crate::net::api::GlooTransport;
use crate::util::auth::link_href;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthStateStore>>();
    let transport = expect_context::<GlooTransport>();
    let busy = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let transport = transport.clone();
            leptos::task::spawn_local(async move {
                let result = session::logout::terminate(&transport).await;
                auth.update(|store| {
                    store.apply_logout();
                });
                if let Err(error) = result {
                    error.report("logout");
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&transport, auth);
        }
    };

    let link_view = move |link: NavLink| match link_href(link.target) {
        Some(href) => view! { <a class="nav-link" href=href>{link.label}</a> }.into_any(),
        None => {
            debug_assert_eq!(link.target, NavTarget::Logout);
            view! {
                <button class="nav-link nav-link--logout" on:click=on_logout.clone() disabled=move || busy.get()>
                    {link.label}
                </button>
            }
            .into_any()
        }
    };

    view! {
        <nav class="nav-bar">
            {move || auth.with(nav_links).into_iter().map(link_view.clone()).collect_view()}
        </nav>
    }
}

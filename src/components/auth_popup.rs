//! Auth Popup
//!
//! Login / signup forms for the demo account system. Failures are shown inline.

use leptos::prelude::*;

use crate::context::use_shop_context;
use crate::popup::{MessageKind, Modal};
use crate::store::{store_close_all, store_set_session, use_shop_store, ShopStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Login,
    Signup,
}

#[component]
pub fn AuthPopup() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let (mode, set_mode) = signal(AuthMode::Login);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let is_open = move || store.popups().read().is_open(Modal::Auth);

    let switch_to = move |next: AuthMode| {
        set_mode.set(next);
        set_error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let auth = ctx.auth();
        let result = match mode.get_untracked() {
            AuthMode::Login => auth.login(&email.get_untracked(), &password.get_untracked()),
            AuthMode::Signup => auth.signup(
                &name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
            ),
        };
        match result {
            Ok(session) => {
                ctx.notify(format!("Welcome, {}!", session.name), MessageKind::Success);
                store_set_session(&store, Some(session));
                store_close_all(&store);
                set_error.set(None);
                set_name.set(String::new());
                set_email.set(String::new());
                set_password.set(String::new());
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div id="auth-popup" class=move || if is_open() { "popup auth-popup active" } else { "popup auth-popup" }>
            <button class="popup-close" on:click=move |_| store_close_all(&store)>"×"</button>

            <div class="auth-tabs">
                <button
                    class=move || if mode.get() == AuthMode::Login { "auth-tab active" } else { "auth-tab" }
                    on:click=move |_| switch_to(AuthMode::Login)
                >
                    "Log in"
                </button>
                <button
                    class=move || if mode.get() == AuthMode::Signup { "auth-tab active" } else { "auth-tab" }
                    on:click=move |_| switch_to(AuthMode::Signup)
                >
                    "Sign up"
                </button>
            </div>

            <form class="auth-form" on:submit=on_submit>
                <Show when=move || mode.get() == AuthMode::Signup>
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </Show>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|msg| view! { <p class="auth-error">{msg}</p> })}

                <button type="submit" class="primary-btn">
                    {move || if mode.get() == AuthMode::Login { "Log in" } else { "Create account" }}
                </button>
                <p class="auth-note">"Demo only: accounts are kept in this browser's local storage."</p>
            </form>
        </div>
    }
}

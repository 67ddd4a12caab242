//! Site Header
//!
//! Brand, demo-auth controls and the cart icon.

use leptos::prelude::*;

use crate::components::CartIcon;
use crate::context::use_shop_context;
use crate::popup::{MessageKind, Modal};
use crate::store::{store_open, store_set_session, use_shop_store, ShopStateStoreFields};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let logout = move |_| {
        if let Err(e) = ctx.auth().logout() {
            log::warn!("logout: {}", e);
        }
        store_set_session(&store, None);
        ctx.notify("You have been logged out.", MessageKind::Success);
    };

    view! {
        <header class="site-header">
            <a href="#" class="brand">"Handmade Boutique"</a>
            <nav class="header-actions">
                {move || match store.session().get() {
                    Some(session) => view! {
                        <span class="user-greeting">
                            <i class="fa-solid fa-user"></i>
                            " " {session.name}
                        </span>
                        <button class="auth-btn" on:click=logout>"Log out"</button>
                    }.into_any(),
                    None => view! {
                        <button class="auth-btn" on:click=move |_| store_open(&store, Modal::Auth)>
                            "Log in"
                        </button>
                    }.into_any(),
                }}
                <CartIcon />
            </nav>
        </header>
    }
}

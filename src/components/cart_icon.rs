//! Cart Icon
//!
//! Header cart button with the item-count badge. The animation engine targets
//! this element by id.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::animation::CART_ICON_ID;
use crate::context::use_shop_context;
use crate::popup::Modal;
use crate::store::{store_open, use_shop_store, ShopStateStoreFields};

#[component]
pub fn CartIcon() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let (pulse, set_pulse) = signal(false);

    let count = Memo::new(move |_| store.cart().read().total_items());

    // Pulse the badge whenever the count changes
    Effect::new(move |prev: Option<u32>| {
        let current = count.get();
        if prev.is_some_and(|p| p != current) {
            set_pulse.set(true);
            let duration = ctx.config.with_value(|c| c.badge_pulse_ms);
            Timeout::new(duration, move || set_pulse.set(false)).forget();
        }
        current
    });

    view! {
        <a
            href="#"
            id=CART_ICON_ID
            class="cart-icon"
            on:click=move |ev| {
                ev.prevent_default();
                store_open(&store, Modal::Cart);
            }
        >
            <i class="fa-solid fa-cart-shopping"></i>
            <span
                id="cart-count"
                class="cart-count"
                style:transform=move || if pulse.get() { "scale(1.3)" } else { "scale(1)" }
            >
                {move || count.get()}
            </span>
        </a>
    }
}

//! Hero Section
//!
//! Intro overlay shown on load. The hero button plays the exit animation,
//! then reveals the shop.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();
    let (exiting, set_exiting) = signal(false);

    let enter_shop = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        if exiting.get_untracked() {
            return;
        }
        set_exiting.set(true);
        log::debug!("hero exit");

        let delay = ctx.config.with_value(|c| c.hero_exit_ms);
        Timeout::new(delay, move || {
            store.site_revealed().set(true);
            scroll_to_top();
        })
        .forget();
    };

    view! {
        <div
            id="intro-overlay"
            class=move || if store.site_revealed().get() { "intro-overlay intro-hide" } else { "intro-overlay" }
        >
            <section class=move || if exiting.get() { "hero hero-exit" } else { "hero" }>
                <h1>"Handmade Boutique"</h1>
                <p>"Candles, soaps and small treasures, made by hand."</p>
                <a href="#" class="hero-btn" on:click=enter_shop>"Shop now"</a>
            </section>
        </div>
    }
}

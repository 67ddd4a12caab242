//! Storefront App
//!
//! Root component: wires the store, the cart animator and every popup.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::animation::CartAnimator;
use crate::auth::DemoAuth;
use crate::catalog::Catalog;
use crate::components::{
    AuthPopup, CartPopup, CategoryFilters, CheckoutPopup, HeroSection, MessagePopup,
    ProductDetailPopup, ProductGrid, SiteHeader, ToastHost,
};
use crate::config::ShopConfig;
use crate::context::{ShopContext, Toasts};
use crate::popup::MessageKind;
use crate::storage::BrowserStorage;
use crate::store::{store_add_to_cart, store_close_all, ShopState, ShopStateStoreFields, ShopStore};

/// Escape closes whatever popup is open
fn bind_escape_close(store: ShopStore) {
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && store.popups().read_untracked().overlay_active() {
            store_close_all(&store);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

fn set_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

#[component]
pub fn App(config: ShopConfig) -> impl IntoView {
    let catalog = Catalog::load();
    log::info!("catalog loaded: {} products", catalog.products().len());

    let session = DemoAuth::new(BrowserStorage, &config).current_session();
    let store = Store::new(ShopState::new(session));
    provide_context(store);

    let toasts = Toasts::new(config.toast_ms);

    // Landing commits the product to the cart
    let landing_catalog = catalog.clone();
    let animator = CartAnimator::new(config.clone(), move |product_id: &str| {
        match landing_catalog.find(product_id) {
            Some(product) => {
                store_add_to_cart(&store, product);
                log::info!("added {} to cart", product_id);
                toasts.notify(format!("{} added to your cart", product.name), MessageKind::Success);
            }
            None => log::warn!("landed unknown product {}", product_id),
        }
    });
    provide_context(ShopContext::new(config, catalog, toasts, animator));

    // Overlay state drives the page scroll lock
    Effect::new(move |_| {
        set_scroll_locked(store.popups().read().overlay_active());
    });

    bind_escape_close(store);

    view! {
        <HeroSection />
        <SiteHeader />

        <main class=move || if store.site_revealed().get() { "site-visible" } else { "site-hidden" }>
            <CategoryFilters />
            <ProductGrid />
        </main>

        <div
            id="cart-overlay"
            class=move || if store.popups().read().overlay_active() { "cart-overlay active" } else { "cart-overlay" }
            on:click=move |_| store_close_all(&store)
        ></div>

        <CartPopup />
        <CheckoutPopup />
        <MessagePopup />
        <ProductDetailPopup />
        <AuthPopup />
        <ToastHost />

        <footer class="site-footer">"Handmade Boutique · demo storefront"</footer>
    }
}

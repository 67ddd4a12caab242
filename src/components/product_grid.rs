//! Product Grid
//!
//! Product cards with the add-to-cart button that launches a flight.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::context::use_shop_context;
use crate::format::format_price;
use crate::models::Product;
use crate::store::{store_show_product, use_shop_store, ShopStateStoreFields};

/// Element the click handler is attached to
pub fn event_source(ev: &web_sys::MouseEvent) -> Option<Element> {
    ev.current_target().and_then(|t| t.dyn_into::<Element>().ok())
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_shop_context();
    let products = ctx.catalog.with_value(|c| c.products().to_vec());
    let stagger_ms = ctx.config.with_value(|c| c.card_stagger_ms);

    view! {
        <section class="product-grid">
            {products.into_iter().enumerate().map(|(index, product)| view! {
                <ProductCard product=product delay_ms={index as u32 * stagger_ms} />
            }).collect_view()}
        </section>
    }
}

#[component]
fn ProductCard(product: Product, delay_ms: u32) -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let category = product.category.clone();
    let visible = move || store.filter().read().matches(&category);
    let revealed = move || store.site_revealed().get();

    let for_detail = product.clone();
    let for_flight = product.clone();

    view! {
        <article
            class=move || if revealed() { "product-card card-animate-in" } else { "product-card" }
            data-id=product.id.clone()
            data-category=product.category.clone()
            style:display=move || if visible() { "" } else { "none" }
            style:animation-delay=format!("{}ms", delay_ms)
            on:click=move |_| store_show_product(&store, for_detail.clone())
        >
            <img src=product.image.clone() alt=product.name.clone() />
            <h3>{product.name.clone()}</h3>
            <span class="price">{format_price(product.price)}</span>
            <button
                class="add-to-cart-btn"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    ctx.fly_to_cart(&for_flight, event_source(&ev));
                }
            >
                <i class="fa-solid fa-cart-plus"></i>
                " Add to cart"
            </button>
        </article>
    }
}

//! Cart Popup
//!
//! Cart lines with quantity controls, the total, and the checkout entry.

use leptos::prelude::*;

use crate::cart::CartItem;
use crate::format::format_price;
use crate::popup::Modal;
use crate::store::{
    store_adjust_quantity, store_begin_checkout, store_close_all, store_remove_from_cart,
    use_shop_store, ShopStateStoreFields,
};

#[component]
pub fn CartPopup() -> impl IntoView {
    let store = use_shop_store();

    let is_open = move || store.popups().read().is_open(Modal::Cart);
    let is_empty = move || store.cart().read().is_empty();

    let checkout = move |_| {
        if let Err(e) = store_begin_checkout(&store) {
            log::info!("checkout refused: {}", e);
        }
    };

    view! {
        <div id="cart-popup" class=move || if is_open() { "popup cart-popup active" } else { "popup cart-popup" }>
            <div class="popup-header">
                <h2>"Your cart"</h2>
                <button id="cart-close" class="popup-close" on:click=move |_| store_close_all(&store)>"×"</button>
            </div>

            <div id="cart-items" class="cart-items">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! {
                        <div class="cart-empty">
                            <i class="fa-solid fa-cart-arrow-down"></i>
                            <p>"Your cart is empty"</p>
                        </div>
                    }
                >
                    <For
                        each=move || store.cart().read().items().to_vec()
                        key=|item| (item.id.clone(), item.quantity())
                        children=move |item| view! { <CartRow item=item /> }
                    />
                </Show>
            </div>

            <div class="cart-footer">
                <div class="cart-total-row">
                    <span>"Total"</span>
                    <span id="cart-total">{move || format_price(store.cart().read().total_price())}</span>
                </div>
                <button id="checkout-btn" class="primary-btn" on:click=checkout>"Checkout"</button>
            </div>
        </div>
    }
}

#[component]
fn CartRow(item: CartItem) -> impl IntoView {
    let store = use_shop_store();
    let id = item.id.clone();
    let (minus_id, plus_id, remove_id) = (id.clone(), id.clone(), id.clone());

    view! {
        <div class="cart-item" data-id=id>
            <div class="cart-item-image">
                <img src=item.image.clone() alt=item.name.clone() />
            </div>
            <div class="cart-item-info">
                <div class="cart-item-title">{item.name.clone()}</div>
                <div class="cart-item-price">{format_price(item.unit_price)}</div>
            </div>
            <div class="cart-item-controls">
                <div class="cart-item-quantity">
                    <button class="quantity-btn minus" on:click=move |_| store_adjust_quantity(&store, &minus_id, -1)>"−"</button>
                    <span>{item.quantity()}</span>
                    <button class="quantity-btn plus" on:click=move |_| store_adjust_quantity(&store, &plus_id, 1)>"+"</button>
                </div>
                <button class="cart-item-remove" on:click=move |_| store_remove_from_cart(&store, &remove_id)>
                    <i class="fa-solid fa-trash"></i>
                </button>
            </div>
        </div>
    }
}

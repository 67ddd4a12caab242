//! Checkout Popup
//!
//! Delivery details form. Confirming validates every required field and,
//! on success, clears the cart and shows the thank-you message.

use leptos::prelude::*;

use crate::checkout::CheckoutField;
use crate::format::format_price;
use crate::popup::Modal;
use crate::store::{
    store_close_all, store_confirm_order, store_set_checkout_field, store_set_checkout_notes,
    use_shop_store,
    ShopStateStoreFields,
};

#[component]
pub fn CheckoutPopup() -> impl IntoView {
    let store = use_shop_store();

    let is_open = move || store.popups().read().is_open(Modal::Checkout);

    let confirm = move || match store_confirm_order(&store) {
        Ok(receipt) => log::info!(
            "order confirmed: {} items, {}",
            receipt.total_items,
            format_price(receipt.total_price)
        ),
        Err(e) => log::info!("order rejected: {}", e),
    };

    view! {
        <div id="checkout-popup" class=move || if is_open() { "popup checkout-popup active" } else { "popup checkout-popup" }>
            <div class="popup-header">
                <h2>"Checkout"</h2>
                <button id="checkout-close" class="popup-close" on:click=move |_| store_close_all(&store)>"×"</button>
            </div>

            <form
                id="checkout-form"
                class="checkout-form"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    confirm();
                }
            >
                {CheckoutField::REQUIRED.into_iter().map(|field| view! {
                    <label class="form-field">
                        <span>{field.label()} " *"</span>
                        <input
                            id=field.input_id()
                            type=field.input_type()
                            class=move || if store.checkout().read().is_invalid(field) { "invalid" } else { "" }
                            prop:value=move || store.checkout().read().value(field).to_string()
                            on:input=move |ev| store_set_checkout_field(&store, field, event_target_value(&ev))
                        />
                    </label>
                }).collect_view()}

                <label class="form-field">
                    <span>"Notes"</span>
                    <textarea
                        id="checkout-notes"
                        prop:value=move || store.checkout().read().notes.clone()
                        on:input=move |ev| store_set_checkout_notes(&store, event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="checkout-total-row">
                    <span>"Total"</span>
                    <span id="checkout-total">{move || format_price(store.cart().read().total_price())}</span>
                </div>

                <button id="checkout-confirm" type="button" class="primary-btn" on:click=move |_| confirm()>
                    "Confirm order"
                </button>
            </form>
        </div>
    }
}

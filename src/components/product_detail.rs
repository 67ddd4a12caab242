//! Product Detail Popup
//!
//! Larger image, price and the Markdown description of one product, with its
//! own add-to-cart button.

use leptos::prelude::*;

use crate::components::product_grid::event_source;
use crate::context::use_shop_context;
use crate::format::format_price;
use crate::markdown::render_description;
use crate::popup::Modal;
use crate::store::{store_close_all, use_shop_store, ShopStateStoreFields};

#[component]
pub fn ProductDetailPopup() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let is_open = move || store.popups().read().is_open(Modal::ProductDetail);

    view! {
        <div id="product-popup" class=move || if is_open() { "popup product-popup active" } else { "popup product-popup" }>
            <button class="popup-close" on:click=move |_| store_close_all(&store)>"×"</button>
            {move || store.detail_product().get().map(|product| {
                let description = render_description(&product.description);
                let for_flight = product.clone();
                view! {
                    <div class="product-detail">
                        <img src=product.image.clone() alt=product.name.clone() />
                        <div class="product-detail-info">
                            <h3>{product.name.clone()}</h3>
                            <span class="price">{format_price(product.price)}</span>
                            <div class="product-description" inner_html=description></div>
                            <button
                                class="primary-btn detail-add-btn"
                                on:click=move |ev: web_sys::MouseEvent| {
                                    // Measure the button before the popup hides it
                                    ctx.fly_to_cart(&for_flight, event_source(&ev));
                                    store_close_all(&store);
                                }
                            >
                                "Add to cart"
                            </button>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

//! Message Popup
//!
//! Success / error dialog. Title, icon and styling follow the message kind.

use leptos::prelude::*;

use crate::popup::Modal;
use crate::store::{store_close_all, use_shop_store, ShopStateStoreFields};

#[component]
pub fn MessagePopup() -> impl IntoView {
    let store = use_shop_store();

    let message = move || store.popups().read().message().clone();
    let popup_class = move || {
        let popups = store.popups().read();
        let active = if popups.is_open(Modal::Message) { " active" } else { "" };
        format!("popup message-popup {}{}", popups.message().kind.class(), active)
    };

    view! {
        <div id="message-popup" class=popup_class>
            <button id="message-close" class="popup-close" on:click=move |_| store_close_all(&store)>"×"</button>
            <h3 id="message-title">
                <i class=move || message().kind.icon()></i>
                " "
                {move || message().title}
            </h3>
            <p id="message-text">{move || message().text}</p>
            <button id="message-ok" class="primary-btn" on:click=move |_| store_close_all(&store)>"OK"</button>
        </div>
    }
}

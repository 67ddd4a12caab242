//! Toast Host

use leptos::prelude::*;

use crate::context::use_shop_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_shop_context();

    view! {
        <div class="toast-host">
            {move || ctx.toasts.current.get().map(|toast| view! {
                <div class=format!("toast {}", toast.kind.class())>{toast.text}</div>
            })}
        </div>
    }
}

//! Application Context
//!
//! Services shared via Leptos Context API: configuration, catalog, the cart
//! animator and the toast slot. Reactive shop data lives in the store.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::Element;

use crate::animation::CartAnimator;
use crate::auth::DemoAuth;
use crate::catalog::Catalog;
use crate::config::ShopConfig;
use crate::error::ShopError;
use crate::models::Product;
use crate::popup::MessageKind;
use crate::storage::BrowserStorage;

/// Short-lived notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub text: String,
    pub kind: MessageKind,
}

/// Single toast slot; a newer toast replaces the visible one
#[derive(Clone, Copy)]
pub struct Toasts {
    /// Current toast - read
    pub current: ReadSignal<Option<Toast>>,
    /// Current toast - write
    set_current: WriteSignal<Option<Toast>>,
    seq: StoredValue<u32>,
    duration_ms: u32,
}

impl Toasts {
    pub fn new(duration_ms: u32) -> Self {
        let (current, set_current) = signal(None::<Toast>);
        Self {
            current,
            set_current,
            seq: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn notify(&self, text: impl Into<String>, kind: MessageKind) {
        self.seq.update_value(|seq| *seq += 1);
        let id = self.seq.get_value();
        self.set_current.set(Some(Toast { id, text: text.into(), kind }));

        let current = self.current;
        let set_current = self.set_current;
        Timeout::new(self.duration_ms, move || {
            // A newer toast owns the slot now
            if current.get_untracked().map(|t| t.id) == Some(id) {
                set_current.set(None);
            }
        })
        .forget();
    }
}

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    pub config: StoredValue<ShopConfig>,
    pub catalog: StoredValue<Catalog>,
    pub toasts: Toasts,
    animator: StoredValue<CartAnimator, LocalStorage>,
}

impl ShopContext {
    pub fn new(config: ShopConfig, catalog: Catalog, toasts: Toasts, animator: CartAnimator) -> Self {
        Self {
            config: StoredValue::new(config),
            catalog: StoredValue::new(catalog),
            toasts,
            animator: StoredValue::new_local(animator),
        }
    }

    /// Start an add-to-cart flight. Busy or broken requests are dropped.
    pub fn fly_to_cart(&self, product: &Product, source: Option<Element>) {
        let result = self
            .animator
            .with_value(|animator| animator.request_flight(&product.id, &product.image, source.as_ref()));
        match result {
            Ok(()) => {}
            Err(ShopError::GuardRejected) => log::debug!("flight busy, dropped click on {}", product.id),
            Err(e) => log::warn!("flight for {} aborted: {}", product.id, e),
        }
    }

    pub fn notify(&self, text: impl Into<String>, kind: MessageKind) {
        self.toasts.notify(text, kind);
    }

    /// Demo auth over `localStorage`
    pub fn auth(&self) -> DemoAuth<BrowserStorage> {
        self.config.with_value(|config| DemoAuth::new(BrowserStorage, config))
    }
}

/// Get the shop context
pub fn use_shop_context() -> ShopContext {
    expect_context::<ShopContext>()
}

//! Global Shop State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components read
//! fields directly; every mutation goes through the helpers below so cart
//! totals and popup exclusivity are maintained in one place.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::CartState;
use crate::catalog::CategoryFilter;
use crate::checkout::{self, CheckoutField, CheckoutForm};
use crate::error::ShopResult;
use crate::models::{Product, Session};
use crate::popup::{Modal, PopupState};

/// Global shop state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Cart contents and derived totals
    pub cart: CartState,
    /// Which modal is open, and the message popup content
    pub popups: PopupState,
    /// Checkout inputs and invalid marks
    pub checkout: CheckoutForm,
    /// Product shown in the detail popup
    pub detail_product: Option<Product>,
    /// Active category filter
    pub filter: CategoryFilter,
    /// Signed-in demo user
    pub session: Option<Session>,
    /// Hero dismissed and shop visible
    pub site_revealed: bool,
}

impl ShopState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Cart
// ========================

pub fn store_add_to_cart(store: &ShopStore, product: &Product) {
    store.cart().write().add_item(product);
}

pub fn store_adjust_quantity(store: &ShopStore, id: &str, delta: i32) {
    store.cart().write().adjust_quantity(id, delta);
}

pub fn store_remove_from_cart(store: &ShopStore, id: &str) {
    store.cart().write().remove_item(id);
}

// ========================
// Popups
// ========================

pub fn store_open(store: &ShopStore, modal: Modal) {
    store.popups().write().open(modal);
}

pub fn store_close_all(store: &ShopStore) {
    store.popups().write().close_all();
}

pub fn store_show_product(store: &ShopStore, product: Product) {
    store.detail_product().set(Some(product));
    store_open(store, Modal::ProductDetail);
}

pub fn store_show_error(store: &ShopStore, text: &str) {
    store.popups().write().show_error(text);
}

// ========================
// Checkout
// ========================

pub fn store_set_checkout_field(store: &ShopStore, field: CheckoutField, value: String) {
    store.checkout().write().set(field, value);
}

pub fn store_set_checkout_notes(store: &ShopStore, notes: String) {
    store.checkout().write().notes = notes;
}

/// Cart → Checkout, or the empty-cart error
pub fn store_begin_checkout(store: &ShopStore) -> ShopResult<()> {
    let cart = store.cart().get_untracked();
    let mut popups = store.popups().get_untracked();
    let result = checkout::begin_checkout(&cart, &mut popups);
    store.popups().set(popups);
    result
}

/// Checkout → Message(success | error)
pub fn store_confirm_order(store: &ShopStore) -> ShopResult<checkout::OrderReceipt> {
    let mut cart = store.cart().get_untracked();
    let mut form = store.checkout().get_untracked();
    let mut popups = store.popups().get_untracked();
    let result = checkout::confirm_order(&mut cart, &mut form, &mut popups);
    store.cart().set(cart);
    store.checkout().set(form);
    store.popups().set(popups);
    result
}

// ========================
// Session
// ========================

pub fn store_set_session(store: &ShopStore, session: Option<Session>) {
    store.session().set(session);
}

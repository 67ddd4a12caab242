#![allow(warnings)]
//! Boutique Storefront Entry Point

mod animation;
mod app;
mod auth;
mod cart;
mod catalog;
mod checkout;
mod components;
mod config;
mod context;
mod error;
mod format;
mod logging;
mod markdown;
mod models;
mod popup;
mod storage;
mod store;

use app::App;
use config::ShopConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ShopConfig::from_document();
    logging::init(config.level_filter());
    log::info!("storefront starting");

    mount_to_body(move || view! { <App config=config /> });
}

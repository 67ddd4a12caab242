//! UI Components
//!
//! Leptos components for the storefront.

mod auth_popup;
mod cart_icon;
mod cart_popup;
mod category_filters;
mod checkout_popup;
mod hero;
mod message_popup;
mod product_detail;
mod product_grid;
mod site_header;
mod toast;

pub use auth_popup::AuthPopup;
pub use cart_icon::CartIcon;
pub use cart_popup::CartPopup;
pub use category_filters::CategoryFilters;
pub use checkout_popup::CheckoutPopup;
pub use hero::HeroSection;
pub use message_popup::MessagePopup;
pub use product_detail::ProductDetailPopup;
pub use product_grid::ProductGrid;
pub use site_header::SiteHeader;
pub use toast::ToastHost;

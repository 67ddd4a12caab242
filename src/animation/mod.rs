//! Add-to-Cart Animation
//!
//! Geometry and flight planning are pure; `engine` and `effects` drive the DOM.

mod dom;
mod effects;
mod engine;
mod flight;
mod geometry;
mod guard;

pub use engine::{CartAnimator, CART_ICON_ID};

//! Cart Animation Engine
//!
//! Flies a product thumbnail from the clicked element to the cart icon, then
//! hands the landed product id to the completion closure given at
//! construction. One flight at a time; extra requests are dropped.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlElement};

use super::dom::{self, TransientNode};
use super::effects;
use super::flight::FlightPlan;
use super::guard::{FlightGuard, FlightToken};
use crate::config::ShopConfig;
use crate::error::{ShopError, ShopResult};

pub const CART_ICON_ID: &str = "cart-icon";

pub struct CartAnimator {
    guard: FlightGuard,
    config: ShopConfig,
    on_land: Rc<dyn Fn(&str)>,
}

/// Everything a flight owns between launch and landing
struct Flight {
    plan: FlightPlan,
    flying: TransientNode,
    icon: HtmlElement,
    token: FlightToken,
}

impl CartAnimator {
    pub fn new(config: ShopConfig, on_land: impl Fn(&str) + 'static) -> Self {
        Self {
            guard: FlightGuard::new(),
            config,
            on_land: Rc::new(on_land),
        }
    }

    pub fn is_flying(&self) -> bool {
        self.guard.is_busy()
    }

    /// Launch a flight for `product_id` from `source`.
    ///
    /// Errors are for logging only: `GuardRejected` while another flight is
    /// airborne, `MissingElement` when the source or `#cart-icon` is absent.
    /// In both cases nothing was started and the guard is free again.
    pub fn request_flight(&self, product_id: &str, image: &str, source: Option<&Element>) -> ShopResult<()> {
        let token = self.guard.try_acquire().ok_or(ShopError::GuardRejected)?;
        let source = source.ok_or_else(|| ShopError::MissingElement("flight source".to_string()))?;
        let icon = dom::element_by_id(CART_ICON_ID)?;

        let plan = FlightPlan::new(
            product_id,
            source.get_bounding_client_rect().into(),
            icon.get_bounding_client_rect().into(),
            dom::now_ms(),
            self.config.flight_ms,
        );

        let flying = TransientNode::spawn("flying-item glow")?;
        if !image.is_empty() {
            flying.set_style("background-image", &format!("url({})", image));
            flying.set_style("background-size", "cover");
            flying.set_style("background-position", "center");
        }
        flying.set_style("transform", &plan.frame_at(plan.start_time).transform());

        log::debug!("flight {} launched", product_id);

        let config = self.config.clone();
        let on_land = Rc::clone(&self.on_land);
        let mut flight = Some(Flight { plan, flying, icon, token });
        effects::run_frames(move |timestamp| {
            let Some(current) = flight.as_ref() else {
                return false;
            };
            let frame = current.plan.frame_at(timestamp);
            current.flying.set_style("transform", &frame.transform());
            current.flying.set_style("opacity", &frame.opacity.to_string());
            if !frame.is_final() {
                return true;
            }
            if let Some(landed) = flight.take() {
                land(landed, &config, on_land.as_ref());
            }
            false
        });
        Ok(())
    }
}

fn land(flight: Flight, config: &ShopConfig, on_land: &dyn Fn(&str)) {
    let Flight { plan, flying, icon, token } = flight;

    effects::cart_hit(icon);
    effects::particle_burst(plan.end, config);
    on_land(&plan.source_id);
    log::debug!("flight {} landed", plan.source_id);

    // Keep the token until the flying node is gone
    Timeout::new(config.landing_grace_ms, move || {
        drop(flying);
        drop(token);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording_animator() -> (CartAnimator, Rc<RefCell<Vec<String>>>) {
        let landed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&landed);
        let animator = CartAnimator::new(ShopConfig::default(), move |id: &str| {
            sink.borrow_mut().push(id.to_string());
        });
        (animator, landed)
    }

    #[test]
    fn test_request_while_flying_is_dropped() {
        let (animator, landed) = recording_animator();
        let held = animator.guard.try_acquire().unwrap();
        assert!(animator.is_flying());

        assert_eq!(animator.request_flight("p1", "", None), Err(ShopError::GuardRejected));
        assert!(landed.borrow().is_empty());
        // The rejected request must not have freed the slot
        assert!(animator.is_flying());

        drop(held);
        assert!(!animator.is_flying());
    }

    #[test]
    fn test_missing_source_releases_guard() {
        let (animator, landed) = recording_animator();
        let result = animator.request_flight("p1", "", None);
        assert!(matches!(result, Err(ShopError::MissingElement(_))));
        assert!(!animator.is_flying());
        assert!(landed.borrow().is_empty());
    }
}

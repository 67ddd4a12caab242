//! Landing Effects
//!
//! Fire-and-forget tasks started when a flight reaches the cart: the cart icon
//! "hit" pulse and a particle burst. Each task owns and removes its own nodes.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use super::dom::{self, TransientNode};
use super::geometry::{particle_position, progress, Point};
use crate::config::ShopConfig;
use crate::error::ShopResult;

const SHAKE_MS: u32 = 500;
const BOUNCE_MS: u32 = 300;
const HIT_COLOR: &str = "#e07a5f";

const PARTICLE_COLORS: &[&str] = &["gold", "red", "blue", "pink"];
const PARTICLE_HALF: f64 = 4.0;

/// Runs `step` with the frame timestamp once per display refresh until it
/// returns `false`.
pub fn run_frames<F>(step: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    let slot: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
    schedule_frame(slot, Rc::new(RefCell::new(step)));
}

fn schedule_frame<F>(slot: Rc<RefCell<Option<AnimationFrame>>>, step: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let frame_slot = Rc::clone(&slot);
    let handle = request_animation_frame(move |timestamp| {
        frame_slot.borrow_mut().take();
        let keep_going = (step.borrow_mut())(timestamp);
        if keep_going {
            schedule_frame(frame_slot, step);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

/// Shake, then bounce with a color flash
pub fn cart_hit(icon: HtmlElement) {
    dom::add_class(&icon, "shake");
    Timeout::new(SHAKE_MS, move || {
        dom::remove_class(&icon, "shake");
        dom::add_class(&icon, "bounce");
        dom::set_style(&icon, "color", HIT_COLOR);
        Timeout::new(BOUNCE_MS, move || {
            let _ = icon.style().remove_property("color");
            dom::remove_class(&icon, "bounce");
        })
        .forget();
    })
    .forget();
}

/// Staggered burst of particles around `center`
pub fn particle_burst(center: Point, config: &ShopConfig) {
    for index in 0..config.particle_count {
        Timeout::new(index * config.particle_stagger_ms, move || {
            if let Err(e) = spawn_particle(center, index as usize) {
                log::debug!("particle {} skipped: {}", index, e);
            }
        })
        .forget();
    }
}

fn spawn_particle(center: Point, index: usize) -> ShopResult<()> {
    let color = PARTICLE_COLORS[index % PARTICLE_COLORS.len()];
    let node = TransientNode::spawn(&format!("particle {}", color))?;

    let angle = js_sys::Math::random() * TAU;
    let distance = 30.0 + js_sys::Math::random() * 50.0;
    let duration = 400.0 + js_sys::Math::random() * 300.0;

    node.set_style("left", "0px");
    node.set_style("top", "0px");
    node.set_style("opacity", "1");
    place_particle(&node, center, 1.0);

    let start = dom::now_ms();
    let mut node = Some(node);
    run_frames(move |timestamp| {
        let p = progress(timestamp - start, duration);
        if let Some(node) = node.as_ref() {
            place_particle(node, particle_position(center, angle, distance, p), 1.0 - p);
        }
        if p >= 1.0 {
            node.take();
            return false;
        }
        true
    });
    Ok(())
}

fn place_particle(node: &TransientNode, at: Point, opacity: f64) {
    node.set_style(
        "transform",
        &format!("translate3d({}px, {}px, 0)", at.x - PARTICLE_HALF, at.y - PARTICLE_HALF),
    );
    node.set_style("opacity", &opacity.to_string());
}

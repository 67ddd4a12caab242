//! Flight Plan
//!
//! Path and per-frame transform of one add-to-cart flight.

use super::geometry::{arc_control_point, progress, quadratic_bezier, Point, Rect};

/// Half the flying element's edge; frames are centered on the path point
pub const FLYING_ITEM_HALF: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    pub source_id: String,
    pub start: Point,
    pub control: Point,
    pub end: Point,
    pub start_time: f64,
    pub duration_ms: f64,
}

/// Visual state of the flying element at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightFrame {
    pub t: f64,
    pub position: Point,
    pub scale: f64,
    pub opacity: f64,
}

impl FlightPlan {
    pub fn new(source_id: &str, source: Rect, target: Rect, start_time: f64, duration_ms: f64) -> Self {
        let start = source.center();
        let end = target.center();
        Self {
            source_id: source_id.to_string(),
            start,
            control: arc_control_point(start, end),
            end,
            start_time,
            duration_ms,
        }
    }

    pub fn frame_at(&self, now: f64) -> FlightFrame {
        let t = progress(now - self.start_time, self.duration_ms);
        FlightFrame {
            t,
            position: quadratic_bezier(self.start, self.control, self.end, t),
            scale: 1.0 - 0.5 * t,
            opacity: 1.0 - 0.7 * t,
        }
    }
}

impl FlightFrame {
    pub fn is_final(&self) -> bool {
        self.t >= 1.0
    }

    /// CSS transform for the 40×40 flying element
    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.position.x - FLYING_ITEM_HALF,
            self.position.y - FLYING_ITEM_HALF,
            self.scale
        )
    }
}

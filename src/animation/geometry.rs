//! Geometry Helpers
//!
//! Pure math for the add-to-cart flight and the landing particles.

use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

/// Bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl From<web_sys::DomRect> for Rect {
    fn from(rect: web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Extra lift applied to every arc, in pixels
const ARC_LIFT: f64 = 100.0;
/// Lift per pixel of horizontal travel
const ARC_SPREAD: f64 = 0.3;

/// Control point above the higher endpoint, horizontally centered,
/// lifted further the wider the horizontal travel
pub fn arc_control_point(start: Point, end: Point) -> Point {
    let dx = end.x - start.x;
    Point::new(
        start.x + dx * 0.5,
        start.y.min(end.y) - dx.abs() * ARC_SPREAD - ARC_LIFT,
    )
}

/// `(1−t)²·p0 + 2(1−t)t·p1 + t²·p2`
pub fn quadratic_bezier(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Normalized progress in [0, 1]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Particle flies out radially with a small upward hop
pub fn particle_position(origin: Point, angle: f64, distance: f64, p: f64) -> Point {
    Point::new(
        origin.x + angle.cos() * distance * p,
        origin.y + angle.sin() * distance * p - 50.0 * p * (1.0 - p),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: Point = Point::new(10.0, 400.0);
    const P1: Point = Point::new(200.0, -50.0);
    const P2: Point = Point::new(390.0, 20.0);

    #[test]
    fn test_bezier_endpoints_exact() {
        assert_eq!(quadratic_bezier(P0, P1, P2, 0.0), P0);
        assert_eq!(quadratic_bezier(P0, P1, P2, 1.0), P2);
    }

    #[test]
    fn test_bezier_midpoint() {
        let mid = quadratic_bezier(P0, P1, P2, 0.5);
        let expected = P0 * 0.25 + P1 * 0.5 + P2 * 0.25;
        assert!((mid.x - expected.x).abs() < 1e-9);
        assert!((mid.y - expected.y).abs() < 1e-9);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect { left: 10.0, top: 20.0, width: 100.0, height: 40.0 };
        assert_eq!(rect.center(), Point::new(60.0, 40.0));
    }

    #[test]
    fn test_control_point_lifts_above_both_ends() {
        let start = Point::new(100.0, 500.0);
        let end = Point::new(900.0, 40.0);
        let control = arc_control_point(start, end);
        assert_eq!(control.x, 500.0);
        assert_eq!(control.y, 40.0 - 800.0 * 0.3 - 100.0);
    }

    #[test]
    fn test_control_point_leftward_travel() {
        let control = arc_control_point(Point::new(900.0, 300.0), Point::new(100.0, 300.0));
        assert_eq!(control.x, 500.0);
        assert_eq!(control.y, 300.0 - 240.0 - 100.0);
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(-5.0, 800.0), 0.0);
        assert_eq!(progress(400.0, 800.0), 0.5);
        assert_eq!(progress(1200.0, 800.0), 1.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn test_particle_ends_on_straight_line() {
        let origin = Point::new(50.0, 50.0);
        assert_eq!(particle_position(origin, 0.0, 40.0, 0.0), origin);
        let end = particle_position(origin, 0.0, 40.0, 1.0);
        assert!((end.x - 90.0).abs() < 1e-9);
        assert!((end.y - 50.0).abs() < 1e-9);
        // Highest hop at the middle of its life
        let mid = particle_position(origin, 0.0, 40.0, 0.5);
        assert!((mid.y - 37.5).abs() < 1e-9);
    }
}

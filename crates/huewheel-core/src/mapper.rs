//! Bidirectional mapping between wheel geometry and HSB colors.
//!
//! Hue is encoded as the polar angle around the wheel center and saturation
//! as the distance from it, relative to the wheel radius. Angle 0 points
//! along the positive x-axis and grows toward positive y. The renderer uses
//! [`angle_for_hue`] too, so the painted wedges and the picked colors agree.

use std::f64::consts::TAU;

use kurbo::{Point, Rect, Vec2};

use crate::color::Hsb;

/// Distance from the center below which the hue is considered undefined.
pub const CENTER_EPSILON: f64 = 1.0;

/// Polar angle (radians) at which a hue is drawn.
pub fn angle_for_hue(hue: f64) -> f64 {
    hue * TAU
}

/// Hue encoded by a polar angle. Any angle is accepted and wrapped into `[0, 1)`.
pub fn hue_for_angle(angle: f64) -> f64 {
    let angle = if angle < 0.0 { angle + TAU } else { angle };
    (angle / TAU).rem_euclid(1.0)
}

/// Position on the wheel that encodes `color`'s hue and saturation.
pub fn point_for_color(color: Hsb, center: Point, radius: f64) -> Point {
    let angle = angle_for_hue(color.hue);
    let distance = color.saturation * radius;
    center + Vec2::new(distance * angle.cos(), distance * angle.sin())
}

/// Color encoded by a position on the wheel.
///
/// Points beyond the rim clamp to full saturation. Points within
/// [`CENTER_EPSILON`] of the center yield white.
pub fn color_for_point(point: Point, center: Point, radius: f64) -> Hsb {
    let delta = point - center;
    let distance = delta.hypot();
    if distance < CENTER_EPSILON {
        return Hsb::WHITE;
    }

    let hue = hue_for_angle(delta.y.atan2(delta.x));
    let saturation = (distance / radius).min(1.0);
    Hsb::new(hue, saturation, 1.0)
}

/// Center and radius of a wheel inscribed in some bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub center: Point,
    pub radius: f64,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self::from_bounds(Rect::ZERO)
    }
}

impl WheelGeometry {
    /// Largest wheel centered in `bounds`.
    pub fn from_bounds(bounds: Rect) -> Self {
        Self {
            center: bounds.center(),
            radius: bounds.width().min(bounds.height()).abs() / 2.0,
        }
    }

    /// Whether `point` lies on the disc (rim included).
    pub fn contains(&self, point: Point) -> bool {
        (point - self.center).hypot() <= self.radius
    }

    /// See [`point_for_color`].
    pub fn point_for_color(&self, color: Hsb) -> Point {
        point_for_color(color, self.center, self.radius)
    }

    /// See [`color_for_point`].
    pub fn color_for_point(&self, point: Point) -> Hsb {
        color_for_point(point, self.center, self.radius)
    }
}

//! Backend-independent wheel primitives.
//!
//! Every renderer draws the same three layers, in order:
//! 1. hue wedges at full saturation,
//! 2. a white radial overlay fading out toward the rim (saturation falloff),
//! 3. the handle marker with its drop shadow.
//!
//! Wedge angles come from [`angle_for_hue`], the same convention the mapper
//! uses to pick colors.

use huewheel_core::{angle_for_hue, HandleState, Hsb, WheelGeometry};
use kurbo::{Circle, CircleSegment, Point, Rect, Vec2};
use peniko::{Color, ColorStop, Gradient};

use crate::renderer::WheelStyle;

/// One angular slice of the disc, filled with a single hue.
#[derive(Debug, Clone)]
pub struct Wedge {
    pub index: usize,
    pub hue: f64,
    pub segment: CircleSegment,
    pub color: Color,
}

/// Hue wedges covering the disc. Empty for a degenerate (zero-radius) wheel.
pub fn hue_wedges(geometry: WheelGeometry, count: usize) -> impl Iterator<Item = Wedge> {
    let count = if geometry.radius > 0.0 { count } else { 0 };
    (0..count).map(move |index| {
        let hue = index as f64 / count as f64;
        let start_angle = angle_for_hue(hue);
        let end_angle = angle_for_hue((index + 1) as f64 / count as f64);
        Wedge {
            index,
            hue,
            segment: CircleSegment::new(
                geometry.center,
                geometry.radius,
                0.0,
                start_angle,
                end_angle - start_angle,
            ),
            color: Hsb::new(hue, 1.0, 1.0).into(),
        }
    })
}

/// White-to-transparent radial fill over the whole disc.
#[derive(Debug, Clone)]
pub struct SaturationOverlay {
    pub disc: Circle,
    pub gradient: Gradient,
}

/// Saturation falloff overlay for `geometry`.
pub fn saturation_overlay(geometry: WheelGeometry) -> SaturationOverlay {
    let stops = [
        ColorStop {
            offset: 0.0,
            color: Color::WHITE.into(),
        },
        ColorStop {
            offset: 1.0,
            color: Color::from_rgba8(255, 255, 255, 0).into(),
        },
    ];
    let gradient =
        Gradient::new_radial(geometry.center, geometry.radius as f32).with_stops(&stops[..]);
    SaturationOverlay {
        disc: Circle::new(geometry.center, geometry.radius),
        gradient,
    }
}

/// A blurred rounded rectangle standing in for a drop shadow.
#[derive(Debug, Clone, Copy)]
pub struct Shadow {
    pub rect: Rect,
    pub corner_radius: f64,
    pub std_dev: f64,
    pub color: Color,
}

/// The handle's fill, outline and shadow.
#[derive(Debug, Clone, Copy)]
pub struct HandleMarker {
    pub circle: Circle,
    pub fill: Color,
    pub stroke_width: f64,
    pub stroke_color: Color,
    pub shadow: Shadow,
}

/// Marker for `handle`, filled with the selected color.
pub fn handle_marker(handle: &HandleState, style: &WheelStyle) -> HandleMarker {
    let radius = style.handle_diameter / 2.0;
    let circle = Circle::new(handle.position, radius);
    let (dx, dy) = style.shadow_offset;
    let shadow_center: Point = handle.position + Vec2::new(dx, dy);

    HandleMarker {
        circle,
        fill: handle.color.into(),
        stroke_width: style.handle_stroke_width,
        stroke_color: style.handle_stroke_color,
        shadow: Shadow {
            rect: Rect::from_center_size(shadow_center, (style.handle_diameter, style.handle_diameter)),
            corner_radius: radius,
            // Blur radius is roughly two standard deviations.
            std_dev: style.shadow_blur / 2.0,
            color: style.shadow_color,
        },
    }
}

//! Color swatch components.

use egui::{vec2, Color32, Painter, Rect, Stroke, Vec2};

use crate::sizing;

/// Style for color swatches.
#[derive(Clone, Copy)]
pub struct ColorSwatchStyle {
    /// Size of the swatch
    pub size: Vec2,
    /// Optional outline drawn around the circle
    pub outline: Option<Stroke>,
}

impl Default for ColorSwatchStyle {
    fn default() -> Self {
        Self {
            size: vec2(sizing::SWATCH, sizing::SWATCH),
            outline: None,
        }
    }
}

/// A circular color swatch, painted inside a rect owned by the caller.
pub struct ColorSwatch {
    color: Color32,
    style: ColorSwatchStyle,
}

impl ColorSwatch {
    pub fn new(color: Color32) -> Self {
        Self {
            color,
            style: ColorSwatchStyle::default(),
        }
    }

    /// Set the style.
    pub fn style(mut self, style: ColorSwatchStyle) -> Self {
        self.style = style;
        self
    }

    /// Paint the swatch centered in `rect` without allocating space.
    pub fn paint_at(&self, painter: &Painter, rect: Rect) {
        let swatch = Rect::from_center_size(rect.center(), self.style.size);
        let radius = swatch.width().min(swatch.height()) / 2.0;
        painter.circle_filled(swatch.center(), radius, self.color);
        if let Some(outline) = self.style.outline {
            painter.circle_stroke(swatch.center(), radius, outline);
        }
    }
}

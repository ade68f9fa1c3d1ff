//! Renderer trait abstraction.

use huewheel_core::{ColorWheel, HandleState, HueWheelConfig, WheelGeometry};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Visual parameters of the wheel and its handle.
#[derive(Debug, Clone, Copy)]
pub struct WheelStyle {
    /// Number of hue wedges around the disc.
    pub wedge_count: usize,
    /// Handle marker diameter.
    pub handle_diameter: f64,
    /// Width of the handle outline.
    pub handle_stroke_width: f64,
    /// Handle outline color.
    pub handle_stroke_color: Color,
    /// Drop shadow offset (x, y).
    pub shadow_offset: (f64, f64),
    /// Drop shadow blur radius.
    pub shadow_blur: f64,
    /// Drop shadow color.
    pub shadow_color: Color,
    /// Whether to draw the handle marker at all.
    pub show_handle: bool,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self {
            wedge_count: 360,
            handle_diameter: 35.0,
            handle_stroke_width: 2.0,
            handle_stroke_color: Color::WHITE,
            shadow_offset: (4.0, 4.0),
            shadow_blur: 23.0,
            shadow_color: Color::from_rgba8(0, 0, 0, 128),
            show_handle: true,
        }
    }
}

impl From<&HueWheelConfig> for WheelStyle {
    fn from(config: &HueWheelConfig) -> Self {
        Self {
            wedge_count: config.wedge_count.max(1),
            handle_diameter: config.handle_diameter,
            handle_stroke_width: config.handle_stroke_width,
            ..Self::default()
        }
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The wheel to render.
    pub wheel: &'a ColorWheel,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Wheel and handle appearance.
    pub style: WheelStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(wheel: &'a ColorWheel) -> Self {
        Self {
            wheel,
            scale_factor: 1.0,
            background_color: Color::BLACK,
            style: WheelStyle::default(),
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the wheel style.
    pub fn with_style(mut self, style: WheelStyle) -> Self {
        self.style = style;
        self
    }

    /// Wheel center and radius.
    pub fn geometry(&self) -> WheelGeometry {
        self.wheel.geometry()
    }

    /// Handle position and color.
    pub fn handle(&self) -> &HandleState {
        self.wheel.handle()
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, wgpu directly, or other rendering engines.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// Each call starts from an empty scene and draws the full wheel from the
    /// context; the wheel itself is never modified.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_config() {
        let config = HueWheelConfig {
            handle_diameter: 44.0,
            wedge_count: 0,
            ..HueWheelConfig::default()
        };
        let style = WheelStyle::from(&config);
        assert_eq!(style.handle_diameter, 44.0);
        assert_eq!(style.wedge_count, 1);
        assert_eq!(style.shadow_blur, 23.0);
    }

    #[test]
    fn test_context_builders() {
        let wheel = ColorWheel::default();
        let ctx = RenderContext::new(&wheel)
            .with_scale_factor(2.0)
            .with_background(Color::WHITE);
        assert_eq!(ctx.scale_factor, 2.0);
        assert_eq!(ctx.background_color.to_rgba8().r, 255);
        assert!(ctx.style.show_handle);
    }
}

//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use crate::wheel::{handle_marker, hue_wedges, saturation_overlay, HandleMarker};
use kurbo::{Affine, Shape as KurboShape, Stroke};
use peniko::Fill;
use vello::Scene;

/// Tolerance used when flattening wedge arcs into paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Vello-based renderer for the color wheel.
pub struct VelloRenderer {
    /// The scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn render_wedges(&mut self, ctx: &RenderContext, transform: Affine) {
        for wedge in hue_wedges(ctx.geometry(), ctx.style.wedge_count) {
            let path = wedge.segment.to_path(PATH_TOLERANCE);
            self.scene
                .fill(Fill::NonZero, transform, wedge.color, None, &path);
        }
    }

    fn render_saturation_overlay(&mut self, ctx: &RenderContext, transform: Affine) {
        let geometry = ctx.geometry();
        if geometry.radius <= 0.0 {
            return;
        }
        let overlay = saturation_overlay(geometry);
        self.scene.fill(
            Fill::NonZero,
            transform,
            &overlay.gradient,
            None,
            &overlay.disc,
        );
    }

    fn render_handle(&mut self, marker: &HandleMarker, transform: Affine) {
        let shadow = marker.shadow;
        self.scene.draw_blurred_rounded_rect(
            transform,
            shadow.rect,
            shadow.color,
            shadow.corner_radius,
            shadow.std_dev,
        );

        self.scene
            .fill(Fill::NonZero, transform, marker.fill, None, &marker.circle);
        self.scene.stroke(
            &Stroke::new(marker.stroke_width),
            transform,
            marker.stroke_color,
            None,
            &marker.circle,
        );
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        // Clear the scene
        self.scene.reset();

        let transform = Affine::scale(ctx.scale_factor);

        self.render_wedges(ctx, transform);
        self.render_saturation_overlay(ctx, transform);

        if ctx.style.show_handle {
            let marker = handle_marker(ctx.handle(), &ctx.style);
            self.render_handle(&marker, transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::WheelStyle;
    use huewheel_core::{ColorWheel, Hsb};
    use kurbo::Rect;

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_wheel_scene() {
        let mut renderer = VelloRenderer::new();
        let wheel = ColorWheel::new(Rect::new(0.0, 0.0, 300.0, 300.0));
        let ctx = RenderContext::new(&wheel);

        renderer.build_scene(&ctx);
        assert!(!renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_is_idempotent() {
        let mut renderer = VelloRenderer::new();
        let mut wheel = ColorWheel::new(Rect::new(0.0, 0.0, 300.0, 300.0));
        wheel.set_color(Hsb::new(0.25, 0.5, 1.0));
        let ctx = RenderContext::new(&wheel).with_scale_factor(2.0);

        renderer.build_scene(&ctx);
        let first = renderer.scene().encoding().n_paths;
        renderer.build_scene(&ctx);
        assert_eq!(renderer.scene().encoding().n_paths, first);
    }

    #[test]
    fn test_wedge_count_drives_scene_size() {
        let wheel = ColorWheel::new(Rect::new(0.0, 0.0, 300.0, 300.0));
        let hidden = WheelStyle {
            show_handle: false,
            ..WheelStyle::default()
        };

        let mut coarse = VelloRenderer::new();
        coarse.build_scene(&RenderContext::new(&wheel).with_style(WheelStyle {
            wedge_count: 12,
            ..hidden
        }));

        let mut fine = VelloRenderer::new();
        fine.build_scene(&RenderContext::new(&wheel).with_style(hidden));

        assert!(fine.scene().encoding().n_paths > coarse.scene().encoding().n_paths);
    }

    #[test]
    fn test_take_scene_leaves_empty() {
        let mut renderer = VelloRenderer::new();
        let wheel = ColorWheel::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        renderer.build_scene(&RenderContext::new(&wheel));

        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }
}

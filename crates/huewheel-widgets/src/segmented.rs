//! Segmented control made of color swatches.

use egui::{
    vec2, Color32, CornerRadius, CursorIcon, Frame, Id, Margin, Rect, Sense, Ui, Vec2,
};

use crate::colors::{ColorSwatch, ColorSwatchStyle};
use crate::{sizing, theme};

/// Appearance of a [`SegmentedControl`].
#[derive(Clone, Copy)]
pub struct SegmentedStyle {
    /// Size of each segment
    pub segment_size: Vec2,
    /// Swatch drawn in the middle of each segment
    pub swatch: ColorSwatchStyle,
    /// Unselected segment background
    pub background: Color32,
    /// Hovered segment background
    pub hover_background: Color32,
    /// Selected segment background
    pub selected_background: Color32,
    /// Corner radius of the whole control
    pub corner_radius: u8,
}

impl Default for SegmentedStyle {
    fn default() -> Self {
        Self {
            segment_size: vec2(sizing::SEGMENT_WIDTH, sizing::SEGMENT_HEIGHT),
            swatch: ColorSwatchStyle::default(),
            background: theme::SEGMENT_BG,
            hover_background: theme::SEGMENT_HOVER,
            selected_background: theme::SEGMENT_SELECTED,
            corner_radius: sizing::CORNER_RADIUS,
        }
    }
}

/// A horizontal row of equally sized segments, each showing one color.
///
/// At most one segment is selected. Clicking a segment reports its index;
/// the caller owns the selection and passes it back in on the next frame.
pub struct SegmentedControl<'a> {
    id_salt: &'a str,
    colors: &'a [(Color32, String)],
    selected: Option<usize>,
    style: SegmentedStyle,
}

impl<'a> SegmentedControl<'a> {
    /// Create a control with one segment per `(color, tooltip)` entry.
    pub fn new(id_salt: &'a str, colors: &'a [(Color32, String)]) -> Self {
        Self {
            id_salt,
            colors,
            selected: None,
            style: SegmentedStyle::default(),
        }
    }

    /// Set the selected segment.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Total size of the control.
    pub fn desired_size(&self) -> Vec2 {
        vec2(
            self.style.segment_size.x * self.colors.len() as f32,
            self.style.segment_size.y,
        )
    }

    /// Show the control and return (clicked segment, rect).
    pub fn show(self, ui: &mut Ui) -> (Option<usize>, Rect) {
        let (rect, _) = ui.allocate_exact_size(self.desired_size(), Sense::hover());
        let base_id = Id::new(self.id_salt);
        let last = self.colors.len().saturating_sub(1);
        let mut clicked = None;

        for (index, (color, tooltip)) in self.colors.iter().enumerate() {
            let segment = Rect::from_min_size(
                rect.min + vec2(self.style.segment_size.x * index as f32, 0.0),
                self.style.segment_size,
            );
            let response = ui.interact(segment, base_id.with(index), Sense::click());

            if ui.is_rect_visible(segment) {
                let background = if self.selected == Some(index) {
                    self.style.selected_background
                } else if response.hovered() {
                    self.style.hover_background
                } else {
                    self.style.background
                };

                // Only the outer ends of the row are rounded.
                let r = self.style.corner_radius;
                let corners = CornerRadius {
                    nw: if index == 0 { r } else { 0 },
                    sw: if index == 0 { r } else { 0 },
                    ne: if index == last { r } else { 0 },
                    se: if index == last { r } else { 0 },
                };
                ui.painter().rect_filled(segment, corners, background);

                ColorSwatch::new(*color)
                    .style(self.style.swatch)
                    .paint_at(ui.painter(), segment);
            }

            if response.clicked() {
                clicked = Some(index);
            }
            response
                .on_hover_text(tooltip.as_str())
                .on_hover_cursor(CursorIcon::PointingHand);
        }

        (clicked, rect)
    }
}

/// Frame for the bar hosting the preset control.
pub fn segment_bar_frame() -> Frame {
    Frame::new().fill(theme::CANVAS_BG).inner_margin(Margin::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presets() -> Vec<(Color32, String)> {
        vec![
            (Color32::from_rgb(0x00, 0xc2, 0xa3), "#00c2a3".to_string()),
            (Color32::from_rgb(0x4b, 0xa5, 0x4f), "#4ba54f".to_string()),
            (Color32::from_rgb(0xff, 0x61, 0x00), "#ff6100".to_string()),
        ]
    }

    #[test]
    fn test_desired_size() {
        let colors = presets();
        let control = SegmentedControl::new("presets", &colors);
        assert_eq!(control.desired_size(), vec2(240.0, 80.0));

        let empty: Vec<(Color32, String)> = Vec::new();
        assert_eq!(
            SegmentedControl::new("none", &empty).desired_size(),
            vec2(0.0, 80.0)
        );
    }

    #[test]
    fn test_show_without_input() {
        let colors = presets();
        let ctx = egui::Context::default();
        let mut shown = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                shown = Some(
                    SegmentedControl::new("presets", &colors)
                        .selected(Some(1))
                        .show(ui),
                );
            });
        });

        let (clicked, rect) = shown.expect("control was shown");
        assert_eq!(clicked, None);
        assert_eq!(rect.size(), vec2(240.0, 80.0));
    }
}

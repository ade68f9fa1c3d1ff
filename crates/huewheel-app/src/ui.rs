//! UI components using egui.

use egui::{Color32, Context};
use huewheel_core::{Hsb, PresetSelector};
use huewheel_widgets::{segment_bar_frame, sizing, SegmentedControl};
use kurbo::{Rect, Size};

/// Height of the preset bar above the wheel, in logical units.
pub const PRESET_BAR_HEIGHT: f64 = sizing::SEGMENT_HEIGHT as f64;

/// Swatch shown for a preset whose hex string cannot be decoded.
const INVALID_SWATCH: Color32 = Color32::from_rgb(128, 128, 128);

/// Actions triggered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// A preset segment was clicked.
    SelectPreset(usize),
}

/// UI state that persists across frames.
pub struct UiState {
    /// Preset colors and the chosen segment.
    pub presets: PresetSelector,
    /// Swatch color and tooltip per segment.
    swatches: Vec<(Color32, String)>,
}

impl UiState {
    pub fn new(presets: PresetSelector) -> Self {
        let swatches = presets
            .colors()
            .into_iter()
            .zip(presets.presets())
            .map(|(color, hex)| match color {
                Some(color) => (hsb_to_color32(color), hex.clone()),
                None => (INVALID_SWATCH, format!("{} (invalid)", hex)),
            })
            .collect();
        Self { presets, swatches }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(PresetSelector::default())
    }
}

/// Convert a picker color to an egui color.
pub fn hsb_to_color32(color: Hsb) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Area left for the wheel below the preset bar, inset by `margin`.
///
/// The result never has negative size; a window too small for the margins
/// yields an empty rect.
pub fn wheel_bounds(window: Size, margin: f64) -> Rect {
    let x0 = margin;
    let y0 = PRESET_BAR_HEIGHT + margin;
    let x1 = (window.width - margin).max(x0);
    let y1 = (window.height - margin).max(y0);
    Rect::new(x0, y0, x1, y1)
}

/// Render all UI panels and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;

    egui::TopBottomPanel::top("preset_bar")
        .exact_height(sizing::SEGMENT_HEIGHT)
        .frame(segment_bar_frame())
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let (clicked, _) = SegmentedControl::new("presets", &ui_state.swatches)
                    .selected(ui_state.presets.selected())
                    .show(ui);
                action = clicked.map(UiAction::SelectPreset);
            });
        });

    action
}

//! egui widget components for the HueWheel host chrome.
//!
//! - **Colors**: circular color swatches
//! - **Segmented**: a row of equally sized segments, each showing a swatch

pub mod colors;
pub mod segmented;

pub use colors::{ColorSwatch, ColorSwatchStyle};
pub use segmented::{segment_bar_frame, SegmentedControl, SegmentedStyle};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Width of one segment in the preset control
    pub const SEGMENT_WIDTH: f32 = 80.0;
    /// Height of the preset row
    pub const SEGMENT_HEIGHT: f32 = 80.0;
    /// Diameter of a swatch inside a segment
    pub const SWATCH: f32 = 30.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Segment background (`#2c2c2c`)
    pub const SEGMENT_BG: Color32 = Color32::from_rgb(0x2c, 0x2c, 0x2c);
    /// Selected segment background (`#3b3b3b`)
    pub const SEGMENT_SELECTED: Color32 = Color32::from_rgb(0x3b, 0x3b, 0x3b);
    /// Hovered segment background
    pub const SEGMENT_HOVER: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
    /// Window background behind the wheel
    pub const CANVAS_BG: Color32 = Color32::BLACK;
}

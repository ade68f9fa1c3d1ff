//! Quick-select presets that snap the wheel to fixed colors.

use crate::color::Hsb;
use crate::widget::ColorWheel;

/// Preset colors offered by default.
pub const DEFAULT_PRESETS: [&str; 3] = ["#00c2a3", "#4ba54f", "#ff6100"];

/// A segmented list of preset colors and the currently chosen segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetSelector {
    presets: Vec<String>,
    selected: Option<usize>,
}

impl Default for PresetSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PRESETS.iter().map(|hex| hex.to_string()).collect())
    }
}

impl PresetSelector {
    /// Create a selector over hex color strings. Nothing is selected.
    pub fn new(presets: Vec<String>) -> Self {
        Self {
            presets,
            selected: None,
        }
    }

    /// The hex strings, in segment order.
    pub fn presets(&self) -> &[String] {
        &self.presets
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether there are no segments.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Index of the chosen segment.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Decoded color of each segment; malformed entries are `None`.
    pub fn colors(&self) -> Vec<Option<Hsb>> {
        self.presets.iter().map(|hex| Hsb::from_hex(hex).ok()).collect()
    }

    /// Choose segment `index` and snap `wheel` to its color.
    ///
    /// Returns false, leaving both the selection and the wheel unchanged, if
    /// the index is out of range or its hex string is malformed.
    pub fn select(&mut self, index: usize, wheel: &mut ColorWheel) -> bool {
        let Some(hex) = self.presets.get(index) else {
            log::warn!("Preset index {} out of range ({} presets)", index, self.presets.len());
            return false;
        };

        match Hsb::from_hex(hex) {
            Ok(color) => {
                log::info!("Preset {} selected: {}", index, hex);
                self.selected = Some(index);
                wheel.set_color(color);
                true
            }
            Err(e) => {
                log::warn!("Ignoring malformed preset {:?}: {}", hex, e);
                false
            }
        }
    }

    /// Forget the chosen segment (e.g. after the user drags the handle).
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

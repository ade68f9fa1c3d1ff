//! Handle state: where the marker sits and which color it stands for.

use kurbo::Point;

use crate::color::Hsb;

/// How the handle got to its current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Never moved; the handle follows the wheel center.
    #[default]
    Unplaced,
    /// Put at a raw pointer position.
    Pointer,
    /// Projected from a color given to `set_color`.
    Color,
}

/// Position and color of the wheel's draggable handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleState {
    /// Handle position in widget-local coordinates.
    pub position: Point,
    /// Currently selected color.
    pub color: Hsb,
    /// Which input last placed the handle.
    pub placement: Placement,
}

impl HandleState {
    /// Unplaced white handle at `center`.
    pub fn centered(center: Point) -> Self {
        Self {
            position: center,
            color: Hsb::WHITE,
            placement: Placement::Unplaced,
        }
    }

    /// Move the handle and record the color it encodes.
    pub fn place(&mut self, position: Point, color: Hsb, placement: Placement) {
        self.position = position;
        self.color = color;
        self.placement = placement;
    }
}

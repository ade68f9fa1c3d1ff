//! Unified pointer events for mouse and touch input.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in widget-local coordinates.
///
/// Touches are reported as [`MouseButton::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    /// The platform aborted the gesture (e.g. touch stolen by the system).
    Cancel,
}

impl PointerEvent {
    /// Whether this event is relevant to color picking (primary button only).
    pub fn is_primary(&self) -> bool {
        match self {
            Self::Down { button, .. } | Self::Up { button, .. } => *button == MouseButton::Left,
            Self::Move { .. } | Self::Cancel => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button_filter() {
        let right = PointerEvent::Down {
            position: Point::ZERO,
            button: MouseButton::Right,
        };
        assert!(!right.is_primary());
        assert!(PointerEvent::Move { position: Point::ZERO }.is_primary());
        assert!(PointerEvent::Cancel.is_primary());
    }
}

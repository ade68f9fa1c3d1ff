//! Interaction state definitions.

/// Pointer interaction state of a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    /// No pointer gesture in progress.
    #[default]
    Idle,
    /// The primary pointer is down and drives the handle.
    Dragging,
}

impl Interaction {
    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }
}

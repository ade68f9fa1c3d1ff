//! The color wheel widget.
//!
//! This module keeps the picker's UI state in one place:
//! - The handle position and the selected color, always consistent
//! - The drag state machine driven by pointer events
//! - Color-changed observers and redraw requests
//!
//! Drawing lives in the render crate; the widget only says when it is stale.

mod handle;
mod observers;
mod state;
mod wheel;

pub use handle::{HandleState, Placement};
pub use observers::ObserverId;
pub use state::Interaction;
pub use wheel::ColorWheel;

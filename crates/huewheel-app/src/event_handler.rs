//! Pointer routing from winit events to the wheel.
//!
//! Window events arrive in physical pixels; the wheel works in logical
//! units. Mouse buttons carry no position in winit, so the last cursor
//! position is remembered. Only one touch drives the wheel at a time.
//! Hover moves never reach the wheel; see [`routes_to_wheel`].

use huewheel_core::{MouseButton, PointerEvent};
use kurbo::{Point, Rect};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, TouchPhase};

/// Converts winit pointer input into [`PointerEvent`]s in logical coordinates.
#[derive(Debug, Default)]
pub struct PointerRouter {
    cursor: Point,
    active_touch: Option<u64>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position, in logical units.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Id of the touch currently driving the wheel.
    pub fn active_touch(&self) -> Option<u64> {
        self.active_touch
    }

    /// Track the cursor and report a move.
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>, scale_factor: f64) -> PointerEvent {
        self.cursor = to_logical(position, scale_factor);
        PointerEvent::Move {
            position: self.cursor,
        }
    }

    /// Press or release at the last cursor position.
    pub fn mouse_input(&mut self, state: ElementState, button: WinitMouseButton) -> Option<PointerEvent> {
        let button = match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => return None,
        };
        let position = self.cursor;

        Some(match state {
            ElementState::Pressed => PointerEvent::Down { position, button },
            ElementState::Released => PointerEvent::Up { position, button },
        })
    }

    /// Touch input. Touches other than the active one are ignored.
    pub fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
        scale_factor: f64,
    ) -> Option<PointerEvent> {
        let position = to_logical(location, scale_factor);

        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_some() {
                    return None;
                }
                self.active_touch = Some(id);
                Some(PointerEvent::Down {
                    position,
                    button: MouseButton::Left,
                })
            }
            TouchPhase::Moved => {
                (self.active_touch == Some(id)).then_some(PointerEvent::Move { position })
            }
            TouchPhase::Ended => {
                if self.active_touch != Some(id) {
                    return None;
                }
                self.active_touch = None;
                Some(PointerEvent::Up {
                    position,
                    button: MouseButton::Left,
                })
            }
            TouchPhase::Cancelled => {
                if self.active_touch != Some(id) {
                    return None;
                }
                Some(self.cancel())
            }
        }
    }

    /// Abort any gesture in progress (e.g. the window lost focus).
    pub fn cancel(&mut self) -> PointerEvent {
        self.active_touch = None;
        PointerEvent::Cancel
    }
}

/// Whether `event` should be forwarded to a wheel laid out in `bounds`.
///
/// Presses start a drag only inside `bounds` and never over egui. Every
/// other event is forwarded only while a drag is in progress, over egui
/// or not.
pub fn routes_to_wheel(
    event: PointerEvent,
    dragging: bool,
    egui_wants_pointer: bool,
    bounds: Rect,
) -> bool {
    match event {
        PointerEvent::Down { position, .. } => !egui_wants_pointer && bounds.contains(position),
        PointerEvent::Move { .. } | PointerEvent::Up { .. } | PointerEvent::Cancel => dragging,
    }
}

fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    let logical = position.to_logical::<f64>(scale_factor);
    Point::new(logical.x, logical.y)
}

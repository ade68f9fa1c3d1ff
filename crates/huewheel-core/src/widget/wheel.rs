//! The stateful color wheel widget.

use kurbo::{Point, Rect};

use super::handle::{HandleState, Placement};
use super::observers::{ColorObservers, ObserverId};
use super::state::Interaction;
use crate::color::Hsb;
use crate::input::PointerEvent;
use crate::mapper::WheelGeometry;

/// A hue/saturation wheel with a draggable handle.
///
/// The handle position and the selected color are kept in lockstep: pointer
/// input derives the color from the position, [`ColorWheel::set_color`]
/// derives the position from the color.
#[derive(Debug)]
pub struct ColorWheel {
    bounds: Rect,
    geometry: WheelGeometry,
    handle: HandleState,
    interaction: Interaction,
    observers: ColorObservers,
    needs_redraw: bool,
}

impl Default for ColorWheel {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl ColorWheel {
    /// Create a wheel laid out in `bounds`, handle centered and white.
    pub fn new(bounds: Rect) -> Self {
        let geometry = WheelGeometry::from_bounds(bounds);
        Self {
            bounds,
            geometry,
            handle: HandleState::centered(geometry.center),
            interaction: Interaction::Idle,
            observers: ColorObservers::default(),
            needs_redraw: true,
        }
    }

    /// Current bounds in host coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Current wheel center and radius.
    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    /// Handle position and selected color.
    pub fn handle(&self) -> &HandleState {
        &self.handle
    }

    /// Handle position.
    pub fn handle_position(&self) -> Point {
        self.handle.position
    }

    /// Selected color.
    pub fn color(&self) -> Hsb {
        self.handle.color
    }

    /// Pointer interaction state.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Snap the handle to `color` without notifying observers.
    ///
    /// Hue and saturation must be in range; out-of-range values place the
    /// handle off the wheel.
    pub fn set_color(&mut self, color: Hsb) {
        let position = self.geometry.point_for_color(color);
        self.handle.place(position, color, Placement::Color);
        self.request_redraw();
    }

    /// Start a drag at `point` and pick the color under it.
    pub fn on_pointer_down(&mut self, point: Point) {
        self.interaction = Interaction::Dragging;
        self.pick(point);
    }

    /// Pick the color under `point`, entering a drag if none is in progress.
    ///
    /// Hosts that deliver hover moves should only forward moves while
    /// [`ColorWheel::interaction`] is dragging.
    pub fn on_pointer_move(&mut self, point: Point) {
        self.interaction = Interaction::Dragging;
        self.pick(point);
    }

    /// End the drag.
    pub fn on_pointer_up(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Abort the drag. The last picked color stays selected.
    pub fn on_pointer_cancel(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Route a unified pointer event. Non-primary buttons are ignored.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        if !event.is_primary() {
            return;
        }
        match event {
            PointerEvent::Down { position, .. } => self.on_pointer_down(position),
            PointerEvent::Move { position } => self.on_pointer_move(position),
            PointerEvent::Up { .. } => self.on_pointer_up(),
            PointerEvent::Cancel => self.on_pointer_cancel(),
        }
    }

    /// Re-layout the wheel.
    ///
    /// An unplaced handle follows the new center. A pointer-placed handle
    /// keeps its raw position. A handle placed by [`ColorWheel::set_color`]
    /// also stays put, unless the previous layout was empty, in which case
    /// it is projected from its color.
    pub fn on_bounds_changed(&mut self, bounds: Rect) {
        let previous = self.geometry;
        self.bounds = bounds;
        self.geometry = WheelGeometry::from_bounds(bounds);

        match self.handle.placement {
            Placement::Unplaced => self.handle.position = self.geometry.center,
            Placement::Color if previous.radius <= 0.0 => {
                self.handle.position = self.geometry.point_for_color(self.handle.color);
            }
            Placement::Color | Placement::Pointer => {}
        }

        log::debug!(
            "Wheel bounds changed: center=({:.1}, {:.1}) radius={:.1}",
            self.geometry.center.x,
            self.geometry.center.y,
            self.geometry.radius
        );
        self.request_redraw();
    }

    /// Register a callback for pointer-driven color changes.
    ///
    /// Callbacks run synchronously on the calling thread, in registration
    /// order. [`ColorWheel::set_color`] does not invoke them.
    pub fn register_color_changed(&mut self, callback: impl FnMut(Hsb) + 'static) -> ObserverId {
        self.observers.register(callback)
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    /// Whether the wheel changed since the last [`ColorWheel::take_redraw_request`].
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consume the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    fn pick(&mut self, point: Point) {
        let color = self.geometry.color_for_point(point);
        self.handle.place(point, color, Placement::Pointer);
        log::debug!(
            "Picked hue={:.3} saturation={:.3} at ({:.1}, {:.1})",
            color.hue,
            color.saturation,
            point.x,
            point.y
        );
        self.observers.notify(color);
        self.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TOLERANCE: f64 = 1e-6;

    fn wheel_200() -> ColorWheel {
        ColorWheel::new(Rect::new(0.0, 0.0, 200.0, 200.0))
    }

    fn assert_point(actual: Point, expected: Point) {
        assert!(
            (actual - expected).hypot() < TOLERANCE,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn recorder(wheel: &mut ColorWheel) -> Rc<RefCell<Vec<Hsb>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        wheel.register_color_changed(move |color| sink.borrow_mut().push(color));
        seen
    }

    #[test]
    fn test_initial_state() {
        let wheel = wheel_200();
        assert_eq!(wheel.handle_position(), Point::new(100.0, 100.0));
        assert_eq!(wheel.color(), Hsb::WHITE);
        assert_eq!(wheel.interaction(), Interaction::Idle);
        assert_eq!(wheel.handle().placement, Placement::Unplaced);
        assert!(wheel.needs_redraw());
    }

    #[test]
    fn test_set_color_places_handle() {
        let mut wheel = wheel_200();
        wheel.set_color(Hsb::new(0.0, 1.0, 1.0));
        assert_point(wheel.handle_position(), Point::new(200.0, 100.0));

        wheel.set_color(Hsb::new(0.25, 0.5, 1.0));
        assert_point(wheel.handle_position(), Point::new(100.0, 150.0));
        assert_eq!(wheel.color(), Hsb::new(0.25, 0.5, 1.0));
    }

    #[test]
    fn test_set_color_is_idempotent() {
        let mut once = wheel_200();
        once.set_color(Hsb::new(0.6, 0.3, 1.0));

        let mut twice = wheel_200();
        twice.set_color(Hsb::new(0.6, 0.3, 1.0));
        twice.set_color(Hsb::new(0.6, 0.3, 1.0));

        assert_eq!(once.handle(), twice.handle());
    }

    #[test]
    fn test_set_color_does_not_notify() {
        let mut wheel = wheel_200();
        let seen = recorder(&mut wheel);
        wheel.set_color(Hsb::new(0.1, 0.9, 1.0));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_set_color_requests_redraw() {
        let mut wheel = wheel_200();
        assert!(wheel.take_redraw_request());
        assert!(!wheel.needs_redraw());
        wheel.set_color(Hsb::new(0.1, 0.9, 1.0));
        assert!(wheel.take_redraw_request());
    }

    #[test]
    fn test_pointer_down_at_center_is_white() {
        let mut wheel = wheel_200();
        wheel.set_color(Hsb::new(0.4, 0.8, 1.0));
        wheel.on_pointer_down(Point::new(100.0, 100.0));
        assert_eq!(wheel.color().saturation, 0.0);
        assert_eq!(wheel.color(), Hsb::WHITE);
        assert_eq!(wheel.interaction(), Interaction::Dragging);
    }

    #[test]
    fn test_pointer_move_picks_and_notifies_once() {
        let mut wheel = wheel_200();
        wheel.on_pointer_down(Point::new(100.0, 100.0));
        let seen = recorder(&mut wheel);

        wheel.on_pointer_move(Point::new(150.0, 100.0));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].hue.abs() < TOLERANCE);
        assert!((seen[0].saturation - 0.5).abs() < TOLERANCE);
        assert_eq!(seen[0], wheel.color());
        assert_eq!(wheel.handle_position(), Point::new(150.0, 100.0));
    }

    #[test]
    fn test_pointer_keeps_raw_position_outside_disc() {
        let mut wheel = wheel_200();
        wheel.on_pointer_down(Point::new(260.0, 100.0));
        assert_eq!(wheel.handle_position(), Point::new(260.0, 100.0));
        assert_eq!(wheel.color().saturation, 1.0);
    }

    #[test]
    fn test_handle_and_color_stay_consistent() {
        let mut wheel = wheel_200();
        wheel.on_pointer_down(Point::new(130.0, 170.0));
        let geometry = wheel.geometry();
        let rederived = geometry.color_for_point(wheel.handle_position());
        assert_eq!(rederived, wheel.color());

        wheel.set_color(Hsb::new(0.8, 0.7, 1.0));
        let rederived = geometry.color_for_point(wheel.handle_position());
        assert!((rederived.hue - 0.8).abs() < TOLERANCE);
        assert!((rederived.saturation - 0.7).abs() < TOLERANCE);
    }

    #[test]
    fn test_move_on_fresh_wheel_picks() {
        let mut wheel = wheel_200();
        let seen = recorder(&mut wheel);

        wheel.on_pointer_move(Point::new(150.0, 100.0));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].hue.abs() < TOLERANCE);
        assert!((seen[0].saturation - 0.5).abs() < TOLERANCE);
        assert_eq!(wheel.handle_position(), Point::new(150.0, 100.0));
        assert_eq!(wheel.interaction(), Interaction::Dragging);
    }

    #[test]
    fn test_drag_state_machine() {
        let mut wheel = wheel_200();
        wheel.handle_pointer_event(PointerEvent::Down {
            position: Point::new(120.0, 100.0),
            button: MouseButton::Left,
        });
        assert_eq!(wheel.interaction(), Interaction::Dragging);

        wheel.handle_pointer_event(PointerEvent::Move {
            position: Point::new(140.0, 100.0),
        });
        assert_eq!(wheel.interaction(), Interaction::Dragging);
        assert_eq!(wheel.handle_position(), Point::new(140.0, 100.0));

        wheel.handle_pointer_event(PointerEvent::Up {
            position: Point::new(140.0, 100.0),
            button: MouseButton::Left,
        });
        assert_eq!(wheel.interaction(), Interaction::Idle);

        wheel.handle_pointer_event(PointerEvent::Down {
            position: Point::new(100.0, 160.0),
            button: MouseButton::Left,
        });
        wheel.handle_pointer_event(PointerEvent::Cancel);
        assert_eq!(wheel.interaction(), Interaction::Idle);
        assert_eq!(wheel.handle_position(), Point::new(100.0, 160.0));
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut wheel = wheel_200();
        let seen = recorder(&mut wheel);
        wheel.handle_pointer_event(PointerEvent::Down {
            position: Point::new(150.0, 100.0),
            button: MouseButton::Right,
        });
        assert_eq!(wheel.interaction(), Interaction::Idle);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let mut wheel = wheel_200();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            wheel.register_color_changed(move |_| order.borrow_mut().push(tag));
        }

        wheel.on_pointer_down(Point::new(150.0, 100.0));
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unregister_observer() {
        let mut wheel = wheel_200();
        let seen = Rc::new(RefCell::new(0));
        let sink = seen.clone();
        let id = wheel.register_color_changed(move |_| *sink.borrow_mut() += 1);

        wheel.on_pointer_down(Point::new(150.0, 100.0));
        assert!(wheel.unregister(id));
        assert!(!wheel.unregister(id));
        wheel.on_pointer_move(Point::new(160.0, 100.0));

        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_bounds_change_recenters_untouched_handle() {
        let mut wheel = wheel_200();
        wheel.on_bounds_changed(Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(wheel.handle_position(), Point::new(200.0, 150.0));
        assert_eq!(wheel.geometry().radius, 150.0);
        assert_eq!(wheel.color(), Hsb::WHITE);
    }

    #[test]
    fn test_bounds_change_keeps_dragged_handle() {
        let mut wheel = wheel_200();
        wheel.on_pointer_down(Point::new(150.0, 100.0));
        wheel.on_pointer_up();

        wheel.on_bounds_changed(Rect::new(0.0, 0.0, 400.0, 400.0));

        assert_eq!(wheel.handle_position(), Point::new(150.0, 100.0));
        assert_eq!(wheel.geometry().center, Point::new(200.0, 200.0));
        assert_eq!(wheel.geometry().radius, 200.0);

        // Later operations use the new geometry.
        wheel.set_color(Hsb::new(0.0, 1.0, 1.0));
        assert_point(wheel.handle_position(), Point::new(400.0, 200.0));
    }

    // Only a handle that was never placed follows the center.
    #[test]
    fn test_relayout_does_not_reset_placed_handle() {
        let mut wheel = wheel_200();
        wheel.set_color(Hsb::new(0.5, 1.0, 1.0));
        wheel.on_bounds_changed(Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_point(wheel.handle_position(), Point::new(0.0, 100.0));
        assert_eq!(wheel.handle().placement, Placement::Color);
    }

    #[test]
    fn test_color_set_before_layout_is_projected() {
        let mut wheel = ColorWheel::default();
        wheel.set_color(Hsb::new(0.0, 0.5, 1.0));
        wheel.on_bounds_changed(Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_point(wheel.handle_position(), Point::new(150.0, 100.0));
    }

    #[test]
    fn test_dragged_handle_survives_empty_layout() {
        let mut wheel = wheel_200();
        wheel.on_pointer_down(Point::new(150.0, 100.0));
        wheel.on_pointer_up();

        wheel.on_bounds_changed(Rect::ZERO);
        wheel.on_bounds_changed(Rect::new(0.0, 0.0, 400.0, 400.0));

        assert_eq!(wheel.handle_position(), Point::new(150.0, 100.0));
        assert_eq!(wheel.handle().placement, Placement::Pointer);
    }
}

//! Translation of platform pointer/touch events into drawing input.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Raw pointer event as delivered by the host, in client coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    MouseDown { position: Point },
    MouseMove { position: Point },
    MouseUp,
    /// Pointer left the drawing surface.
    MouseLeave,
    /// Active touch points, first one drives drawing.
    TouchStart { touches: Vec<Point> },
    TouchMove { touches: Vec<Point> },
    TouchEnd,
    TouchCancel,
}

/// Normalized input consumed by the drawing session, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Start(Point),
    Move(Point),
    End,
}

/// Maps client-space pointer events onto the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputAdapter {
    /// Top-left of the surface in client coordinates.
    surface_origin: Point,
}

impl InputAdapter {
    /// Create an adapter for a surface whose top-left sits at `surface_origin`.
    pub fn new(surface_origin: Point) -> Self {
        Self { surface_origin }
    }

    /// Update after the surface moved within the client area.
    pub fn set_surface_origin(&mut self, surface_origin: Point) {
        self.surface_origin = surface_origin;
    }

    pub fn surface_origin(&self) -> Point {
        self.surface_origin
    }

    /// Convert client coordinates to surface-local coordinates.
    pub fn to_surface(&self, client: Point) -> Point {
        client - self.surface_origin.to_vec2()
    }

    /// Translate a pointer event.
    ///
    /// Leaving the surface counts as input end so a stroke never stays stuck
    /// in progress. Touch events without any touch point are dropped.
    pub fn translate(&self, event: &PointerEvent) -> Option<InputEvent> {
        match event {
            PointerEvent::MouseDown { position } => Some(InputEvent::Start(self.to_surface(*position))),
            PointerEvent::MouseMove { position } => Some(InputEvent::Move(self.to_surface(*position))),
            PointerEvent::TouchStart { touches } => touches
                .first()
                .map(|p| InputEvent::Start(self.to_surface(*p))),
            PointerEvent::TouchMove { touches } => touches
                .first()
                .map(|p| InputEvent::Move(self.to_surface(*p))),
            PointerEvent::MouseUp
            | PointerEvent::MouseLeave
            | PointerEvent::TouchEnd
            | PointerEvent::TouchCancel => Some(InputEvent::End),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_events_are_offset() {
        let adapter = InputAdapter::new(Point::new(100.0, 50.0));
        assert_eq!(
            adapter.translate(&PointerEvent::MouseDown { position: Point::new(110.0, 60.0) }),
            Some(InputEvent::Start(Point::new(10.0, 10.0)))
        );
        assert_eq!(
            adapter.translate(&PointerEvent::MouseMove { position: Point::new(150.0, 90.0) }),
            Some(InputEvent::Move(Point::new(50.0, 40.0)))
        );
        assert_eq!(adapter.translate(&PointerEvent::MouseUp), Some(InputEvent::End));
    }

    #[test]
    fn test_leave_ends_input() {
        let adapter = InputAdapter::default();
        assert_eq!(adapter.translate(&PointerEvent::MouseLeave), Some(InputEvent::End));
        assert_eq!(adapter.translate(&PointerEvent::TouchCancel), Some(InputEvent::End));
    }

    #[test]
    fn test_touch_uses_first_point() {
        let adapter = InputAdapter::new(Point::new(5.0, 5.0));
        let event = PointerEvent::TouchStart {
            touches: vec![Point::new(15.0, 25.0), Point::new(300.0, 300.0)],
        };
        assert_eq!(adapter.translate(&event), Some(InputEvent::Start(Point::new(10.0, 20.0))));
    }

    #[test]
    fn test_touch_without_points_is_dropped() {
        let adapter = InputAdapter::default();
        assert_eq!(adapter.translate(&PointerEvent::TouchMove { touches: vec![] }), None);
    }

    #[test]
    fn test_surface_origin_update() {
        let mut adapter = InputAdapter::default();
        adapter.set_surface_origin(Point::new(20.0, 0.0));
        assert_eq!(adapter.to_surface(Point::new(20.0, 7.0)), Point::new(0.0, 7.0));
        assert_eq!(adapter.surface_origin(), Point::new(20.0, 0.0));
    }

    #[test]
    fn test_pointer_event_json_shape() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"type":"mouse_down","position":{"x":1.0,"y":2.0}}"#).unwrap();
        assert_eq!(event, PointerEvent::MouseDown { position: Point::new(1.0, 2.0) });
    }
}

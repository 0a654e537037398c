//! Robot-style driver for gesture tests
//!
//! Wraps a [`TouchHandler`], a [`RecordingSlider`] and a [`FakeDocument`] and
//! feeds them synthetic touch and mouse events.
//!
//! # Example
//!
//! ```
//! use slidekit_gesture::{SliderEvent, TouchConfig};
//! use slidekit_testing::{GestureRobot, RecordingSlider};
//!
//! let mut robot = GestureRobot::new(RecordingSlider::horizontal(TouchConfig::default(), 1000.0));
//! robot.touch_down(200.0, 100.0);
//! robot.touch_move(180.0, 100.0);
//! assert_eq!(robot.slider().translate, -20.0);
//! assert!(robot.slider().events().contains(&SliderEvent::SliderMove));
//! ```

use crate::document::FakeDocument;
use crate::recording_slider::RecordingSlider;
use slidekit_gesture::{
    ElementId, GestureSession, GestureSummary, InputEvent, InputEventKind, InputOutcome,
    MoveOutcome, SliderId, StartOutcome, TouchHandler,
};
use slidekit_graphics::Point;

/// Default screen width used for edge swipe detection.
pub const DEFAULT_SCREEN_WIDTH: f32 = 400.0;

pub struct GestureRobot {
    handler: TouchHandler,
    slider: RecordingSlider,
    document: FakeDocument,
    screen_width: f32,
    target: ElementId,
}

impl GestureRobot {
    /// Creates a robot whose events target a plain slide element.
    pub fn new(slider: RecordingSlider) -> Self {
        let mut document = FakeDocument::new();
        let container = document.add(document.root(), "div", &["swiper-container"]);
        let target = document.add(container, "div", &["swiper-slide"]);
        Self {
            handler: TouchHandler::new(SliderId(1)),
            slider,
            document,
            screen_width: DEFAULT_SCREEN_WIDTH,
            target,
        }
    }

    pub fn with_screen_width(mut self, width: f32) -> Self {
        self.screen_width = width;
        self
    }

    pub fn slider(&self) -> &RecordingSlider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut RecordingSlider {
        &mut self.slider
    }

    pub fn document(&self) -> &FakeDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut FakeDocument {
        &mut self.document
    }

    pub fn session(&self) -> &GestureSession {
        self.handler.session()
    }

    pub fn handler_mut(&mut self) -> &mut TouchHandler {
        &mut self.handler
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    /// Sends subsequent events to `target`.
    pub fn set_target(&mut self, target: ElementId) {
        self.target = target;
    }

    pub fn touch_down(&mut self, x: f32, y: f32) -> StartOutcome {
        let event = InputEvent::touch(InputEventKind::Start, &[Point::new(x, y)], self.target);
        self.dispatch_start(&event)
    }

    pub fn touch_move(&mut self, x: f32, y: f32) -> MoveOutcome {
        self.touch_move_contacts(&[Point::new(x, y)])
    }

    pub fn touch_move_contacts(&mut self, contacts: &[Point]) -> MoveOutcome {
        let event = InputEvent::touch(InputEventKind::Move, contacts, self.target);
        self.dispatch_move(&event)
    }

    pub fn mouse_down(&mut self, x: f32, y: f32) -> StartOutcome {
        let event = InputEvent::mouse(InputEventKind::Start, Point::new(x, y), self.target);
        self.dispatch_start(&event)
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) -> MoveOutcome {
        let event = InputEvent::mouse(InputEventKind::Move, Point::new(x, y), self.target);
        self.dispatch_move(&event)
    }

    pub fn dispatch_start(&mut self, event: &InputEvent) -> StartOutcome {
        let mut env = self.document.environment(self.screen_width);
        self.handler.on_touch_start(&mut self.slider, &mut env, event)
    }

    pub fn dispatch_move(&mut self, event: &InputEvent) -> MoveOutcome {
        let mut env = self.document.environment(self.screen_width);
        self.handler.on_touch_move(&mut self.slider, &mut env, event)
    }

    /// Routes `event` by its kind, as a host's event loop would.
    pub fn dispatch(&mut self, event: &InputEvent) -> InputOutcome {
        let mut env = self.document.environment(self.screen_width);
        self.handler.on_input(&mut self.slider, &mut env, event)
    }

    pub fn release(&mut self) -> Option<GestureSummary> {
        self.handler.release(&mut self.slider)
    }

    pub fn cancel(&mut self) {
        self.handler.cancel(&mut self.slider);
    }

    /// Touches down at `from` and moves to `to` in `steps` equal samples.
    pub fn drag(&mut self, from: Point, to: Point, steps: usize) -> Vec<MoveOutcome> {
        self.touch_down(from.x, from.y);
        let steps = steps.max(1);
        (1..=steps)
            .map(|step| {
                let t = step as f32 / steps as f32;
                self.touch_move(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
            })
            .collect()
    }
}

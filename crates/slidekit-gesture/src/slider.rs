//! The slider collaborator driven by the gesture handlers.
//!
//! Layout, transitions and rendering live behind this trait. The handlers read
//! bounds and configuration from it and push translate updates back into it.

use crate::config::TouchConfig;
use crate::input::InputEvent;
use std::time::Duration;

/// Main axis of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Notifications the handlers emit through [`Slider::emit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderEvent {
    /// A gesture session was opened.
    TouchStart,
    /// A move sample arrived for an open session.
    TouchMove,
    /// The gesture runs across the slider axis; an ancestor may want it.
    TouchMoveOpposite,
    /// The first accepted drag sample of a session.
    SliderFirstMove,
    /// Every accepted drag sample.
    SliderMove,
}

/// Slider state and effects consumed by the gesture handlers.
///
/// Translates follow the usual carousel convention: `min_translate` is the
/// largest value (content at its start) and `max_translate` the smallest.
pub trait Slider {
    /// Touch configuration for the current session.
    fn touch_config(&self) -> &TouchConfig;

    fn min_translate(&self) -> f32;

    fn max_translate(&self) -> f32;

    /// Live translate of the content.
    fn translate(&self) -> f32;

    fn set_translate(&mut self, translate: f32);

    fn set_transition(&mut self, duration: Duration);

    /// Completes a running transition immediately.
    fn finish_transition(&mut self);

    fn orientation(&self) -> Orientation;

    /// Whether translates are mirrored by a right-to-left layout.
    fn is_rtl(&self) -> bool;

    /// Whether a slide transition is in flight.
    fn is_animating(&self) -> bool;

    /// Re-measures the slider; layout may have changed since the last gesture.
    fn update_size(&mut self);

    fn set_grab_cursor(&mut self, grabbing: bool);

    fn emit(&mut self, event: SliderEvent, input: &InputEvent);
}

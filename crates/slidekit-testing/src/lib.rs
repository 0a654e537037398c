//! Testing utilities and harness for slidekit

pub mod document;
pub mod recording_slider;
pub mod robot;

pub use document::{ElementNode, ElementStore, FakeDocument, FocusState};
pub use recording_slider::{RecordingSlider, SliderCall};
pub use robot::GestureRobot;

pub mod prelude {
    pub use crate::document::{ElementNode, FakeDocument};
    pub use crate::recording_slider::{RecordingSlider, SliderCall};
    pub use crate::robot::GestureRobot;
}

//! Touch and pointer gesture core for sliding carousels.
//!
//! Classifies raw input into drags of the slider content or page scrolls,
//! turns finger displacement into a bounded translate with rubber-band edges
//! and direction locks, and coordinates with nested sliders through claims
//! on the shared input event. Layout and animation stay with the host behind
//! the [`Slider`] trait.

pub mod config;
pub mod error;
pub mod gesture_constants;
pub mod handler;
pub mod input;
pub mod policy;
pub mod session;
pub mod slider;

pub use config::TouchConfig;
pub use error::ConfigError;
pub use handler::{
    classify_scroll, GestureSummary, InputOutcome, MoveOutcome, StartOutcome, StartRejection,
    TouchHandler,
};
pub use input::{
    ElementId, ElementTree, FocusProvider, InputClaim, InputEvent, InputEventKind, PointerButton,
    PointerType, SliderId, TouchEnvironment,
};
pub use session::{GestureSession, MovementState, ScrollIntent, SwipeDirection};
pub use slider::{Orientation, Slider, SliderEvent};

pub mod prelude {
    pub use crate::config::TouchConfig;
    pub use crate::handler::{MoveOutcome, StartOutcome, StartRejection, TouchHandler};
    pub use crate::input::prelude::*;
    pub use crate::session::{ScrollIntent, SwipeDirection};
    pub use crate::slider::{Orientation, Slider, SliderEvent};
}

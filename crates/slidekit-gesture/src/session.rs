//! Per-gesture session state.
//!
//! One [`GestureSession`] tracks a single contact from the start event until
//! a release, a cancel, or a guard closes it.

use slidekit_graphics::Point;
use web_time::Instant;

/// Outcome of the scroll-versus-drag decision for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollIntent {
    /// Not enough movement yet to decide.
    #[default]
    Undecided,
    /// The contact moves across the slider axis; the page should scroll.
    Scrolling,
    /// The contact moves along the slider axis.
    Dragging,
}

impl ScrollIntent {
    pub fn is_decided(self) -> bool {
        self != ScrollIntent::Undecided
    }

    pub fn is_scrolling(self) -> bool {
        self == ScrollIntent::Scrolling
    }
}

/// Whether the contact has moved at all since the session opened.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementState {
    #[default]
    Unknown,
    Moving,
}

/// Navigation direction implied by the latest drag sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeDirection {
    #[default]
    Unresolved,
    /// Content dragged toward larger translates, revealing earlier slides.
    Prev,
    /// Content dragged toward smaller translates, revealing later slides.
    Next,
}

#[derive(Clone, Copy, Debug)]
pub struct TouchStart {
    pub position: Point,
    pub time: Instant,
}

#[derive(Clone, Debug)]
pub struct GestureSession {
    pub touched: bool,
    pub moved: bool,
    pub is_touch_input: bool,
    pub scrolling: ScrollIntent,
    pub start_moving: MovementState,
    pub threshold_passed: bool,
    pub start: TouchStart,
    pub current: Point,
    /// Raw displacement along the slider axis, before touch ratio and RTL.
    pub diff: f32,
    pub start_translate: f32,
    pub current_translate: f32,
    pub direction: SwipeDirection,
    pub allow_callbacks: bool,
    /// Whether a release phase may carry momentum into a bounce.
    pub allow_momentum_bounce: bool,
    /// Whether this session switched the grab cursor on.
    pub grab_cursor_active: bool,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self {
            touched: false,
            moved: false,
            is_touch_input: false,
            scrolling: ScrollIntent::Undecided,
            start_moving: MovementState::Unknown,
            threshold_passed: false,
            start: TouchStart {
                position: Point::ZERO,
                time: Instant::now(),
            },
            current: Point::ZERO,
            diff: 0.0,
            start_translate: 0.0,
            current_translate: 0.0,
            direction: SwipeDirection::Unresolved,
            allow_callbacks: false,
            allow_momentum_bounce: true,
            grab_cursor_active: false,
        }
    }
}

impl GestureSession {
    /// Opens a session for a contact at `position` while the content sits at
    /// `translate`.
    pub fn open(position: Point, is_touch_input: bool, translate: f32) -> Self {
        Self {
            touched: true,
            is_touch_input,
            start: TouchStart {
                position,
                time: Instant::now(),
            },
            current: position,
            start_translate: translate,
            current_translate: translate,
            allow_callbacks: true,
            ..Self::default()
        }
    }

    /// Closes the session early without moving content.
    pub fn close(&mut self) {
        self.touched = false;
        self.moved = false;
    }

    /// Whether a contact is down and has produced drag samples.
    pub fn is_dragging(&self) -> bool {
        self.touched && self.moved
    }

    /// Moves the start of the gesture to `position` and restarts the clock.
    pub fn rebaseline(&mut self, position: Point) {
        self.start = TouchStart {
            position,
            time: Instant::now(),
        };
        self.current = position;
    }

    /// Displacement of the current sample from the session start.
    pub fn delta(&self) -> Point {
        self.current - self.start.position
    }
}

//! Classification results reported by the gesture handlers.
//!
//! None of these are failures: a rejected start or a sample yielded to page
//! scrolling is a successful decision.

use crate::session::SwipeDirection;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartRejection {
    /// A slide transition is running and interaction during it is disabled.
    AnimatingTransition,
    /// Pointer input pressed with a button other than the primary one.
    SecondaryButton,
    /// Another contact is already dragging the content.
    GestureInProgress,
    /// The target sits inside an element excluded from swiping.
    NoSwipingTarget,
    /// The target lies outside the configured swipe handler.
    OutsideSwipeHandler,
    /// The contact started inside the screen-edge margin.
    EdgeSwipeZone,
    /// The event carried no usable coordinates.
    MissingCoordinates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Accepted,
    Rejected(StartRejection),
}

impl StartOutcome {
    pub fn is_accepted(self) -> bool {
        self == StartOutcome::Accepted
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No gesture session is open.
    NoSession,
    /// A touch gesture received a mouse sample.
    InputMismatch,
    /// A nested slider already consumed this sample.
    ClaimedByNested,
    MissingCoordinates,
    /// Dragging is disabled; the session start follows the contact.
    DragDisabled,
    /// The drag pushed past a bound that was already reached; session closed.
    EdgeReleased,
    /// The contact is on the focused form control, which keeps the input.
    FormControlFocused,
    /// More than one contact is down.
    MultiTouch,
    /// Displacement is still below the drag threshold.
    BelowThreshold,
    /// The gesture is a page scroll; session closed.
    Scrolling,
    /// Neither coordinate has changed yet.
    AwaitingMovement,
    /// Drag accepted but pinned at the start translate until the threshold
    /// along the slider axis is exceeded.
    ThresholdHeld,
    /// The threshold was just exceeded; the gesture restarts from here.
    ThresholdLatched,
    /// The content was dragged to `translate`. `applied` is false when the
    /// slider does not follow the finger.
    Dragged { translate: f32, applied: bool },
}

impl MoveOutcome {
    /// The translate pushed to the slider by this sample, if any.
    pub fn applied_translate(self) -> Option<f32> {
        match self {
            MoveOutcome::Dragged {
                translate,
                applied: true,
            } => Some(translate),
            _ => None,
        }
    }
}

/// State handed to the release phase when a session ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSummary {
    pub moved: bool,
    /// Raw displacement along the slider axis.
    pub diff: f32,
    pub direction: SwipeDirection,
    pub start_translate: f32,
    pub current_translate: f32,
    pub allow_momentum_bounce: bool,
    /// Time since the session started or was last re-baselined.
    pub duration: Duration,
}

/// Result of [`TouchHandler::on_input`](super::TouchHandler::on_input).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputOutcome {
    Start(StartOutcome),
    Move(MoveOutcome),
    /// The session ended; carries the summary when one was open.
    Released(Option<GestureSummary>),
    Cancelled,
}

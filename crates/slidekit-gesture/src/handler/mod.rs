//! Touch and pointer handlers of one slider instance.

mod move_classifier;
mod outcome;
mod release;
mod start;

pub use move_classifier::classify_scroll;
pub use outcome::{GestureSummary, InputOutcome, MoveOutcome, StartOutcome, StartRejection};

use crate::input::{InputEvent, InputEventKind, SliderId, TouchEnvironment};
use crate::session::GestureSession;
use crate::slider::Slider;

/// Gesture state machine owned by one slider.
///
/// Holds at most one session. Events must be delivered in platform order;
/// every handler runs to completion.
pub struct TouchHandler {
    id: SliderId,
    session: GestureSession,
}

impl TouchHandler {
    pub fn new(id: SliderId) -> Self {
        Self {
            id,
            session: GestureSession::default(),
        }
    }

    pub fn id(&self) -> SliderId {
        self.id
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Routes `event` to the handler matching its kind.
    pub fn on_input<S: Slider + ?Sized>(
        &mut self,
        slider: &mut S,
        env: &mut TouchEnvironment<'_>,
        event: &InputEvent,
    ) -> InputOutcome {
        match event.kind {
            InputEventKind::Start => InputOutcome::Start(self.on_touch_start(slider, env, event)),
            InputEventKind::Move => InputOutcome::Move(self.on_touch_move(slider, env, event)),
            InputEventKind::End => InputOutcome::Released(self.release(slider)),
            InputEventKind::Cancel => {
                self.cancel(slider);
                InputOutcome::Cancelled
            }
        }
    }

    /// Handles a pointer-down or touch-start event.
    pub fn on_touch_start<S: Slider + ?Sized>(
        &mut self,
        slider: &mut S,
        env: &mut TouchEnvironment<'_>,
        event: &InputEvent,
    ) -> StartOutcome {
        start::handle_start(&mut self.session, slider, env, event)
    }

    /// Handles a pointer-move or touch-move event.
    pub fn on_touch_move<S: Slider + ?Sized>(
        &mut self,
        slider: &mut S,
        env: &mut TouchEnvironment<'_>,
        event: &InputEvent,
    ) -> MoveOutcome {
        move_classifier::handle_move(self.id, &mut self.session, slider, env, event)
    }

    /// Ends the current session and returns what the release phase needs.
    ///
    /// Returns `None` when no session is open, including sessions a guard
    /// already closed.
    pub fn release<S: Slider + ?Sized>(&mut self, slider: &mut S) -> Option<GestureSummary> {
        release::handle_release(&mut self.session, slider)
    }

    /// Ends the current session without a hand-off.
    pub fn cancel<S: Slider + ?Sized>(&mut self, slider: &mut S) {
        release::close_session(&mut self.session, slider);
    }

    /// Stops `touchMove` notifications for the rest of the current session.
    pub fn suppress_callbacks(&mut self) {
        self.session.allow_callbacks = false;
    }
}

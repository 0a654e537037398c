//! Closes a gesture session and hands its state to the release phase.

use super::outcome::GestureSummary;
use crate::session::{GestureSession, MovementState};
use crate::slider::Slider;

pub(crate) fn handle_release<S: Slider + ?Sized>(
    session: &mut GestureSession,
    slider: &mut S,
) -> Option<GestureSummary> {
    // A guard may already have closed the session; nothing is left for the
    // release phase then, but the slider still needs its cursor back.
    let summary = session.touched.then(|| GestureSummary {
        moved: session.moved,
        diff: session.diff,
        direction: session.direction,
        start_translate: session.start_translate,
        current_translate: session.current_translate,
        allow_momentum_bounce: session.allow_momentum_bounce,
        duration: session.start.time.elapsed(),
    });
    close_session(session, slider);
    if let Some(summary) = &summary {
        log::debug!("gesture session released: {summary:?}");
    }
    summary
}

/// Ends the session and undoes the slider effects it switched on.
pub(crate) fn close_session<S: Slider + ?Sized>(
    session: &mut GestureSession,
    slider: &mut S,
) {
    if session.grab_cursor_active {
        slider.set_grab_cursor(false);
        session.grab_cursor_active = false;
    }
    session.close();
    session.start_moving = MovementState::Unknown;
}

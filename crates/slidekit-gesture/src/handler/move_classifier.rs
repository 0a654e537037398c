//! Classifies move samples of an open session and drives the slider.
//!
//! Each sample runs through the guards below, then the scroll/drag decision,
//! then the translate pipeline:
//!
//! 1. guards that ignore the sample or close the session,
//! 2. threshold pre-check on the raw displacement,
//! 3. one-time scroll versus drag resolution from the contact angle,
//! 4. first-move side effects on the slider,
//! 5. edge resistance, then direction locks,
//! 6. threshold gating of the visual update,
//! 7. `set_translate` when the content follows the finger.

use super::outcome::MoveOutcome;
use crate::gesture_constants::SCROLL_DECISION_DISTANCE_SQ;
use crate::input::{InputEvent, SliderId, TouchEnvironment};
use crate::policy::{
    apply_direction_lock, apply_edge_resistance, AllowedDirections, Resistance, TranslateBounds,
};
use crate::session::{GestureSession, MovementState, ScrollIntent, SwipeDirection};
use crate::slider::{Orientation, Slider, SliderEvent};
use slidekit_graphics::Point;
use std::time::Duration;

/// Numeric and boolean settings read once per sample, so the configuration
/// borrow ends before the slider is mutated.
#[derive(Clone, Copy, Debug)]
struct MoveParams {
    allow_touch_move: bool,
    release_on_edges: bool,
    threshold: f32,
    touch_angle: f32,
    touch_ratio: f32,
    resistance: Resistance,
    follow_finger: bool,
    stop_propagation: bool,
    grab_cursor: bool,
    allowed: AllowedDirections,
    orientation: Orientation,
    rtl: bool,
}

impl MoveParams {
    fn read<S: Slider + ?Sized>(slider: &S) -> Self {
        let config = slider.touch_config();
        Self {
            allow_touch_move: config.allow_touch_move,
            release_on_edges: config.touch_release_on_edges && !config.r#loop,
            threshold: config.threshold,
            touch_angle: config.touch_angle,
            touch_ratio: config.touch_ratio,
            resistance: Resistance {
                enabled: config.resistance,
                ratio: config.effective_resistance_ratio(),
            },
            follow_finger: config.follow_finger,
            stop_propagation: config.touch_move_stop_propagation && !config.nested,
            grab_cursor: config.grab_cursor,
            allowed: AllowedDirections {
                next: config.allow_slide_next,
                prev: config.allow_slide_prev,
            },
            orientation: slider.orientation(),
            rtl: slider.is_rtl(),
        }
    }
}

pub(crate) fn handle_move<S: Slider + ?Sized>(
    id: SliderId,
    session: &mut GestureSession,
    slider: &mut S,
    env: &mut TouchEnvironment<'_>,
    event: &InputEvent,
) -> MoveOutcome {
    if !session.touched {
        if session.start_moving == MovementState::Moving && session.scrolling.is_scrolling() {
            slider.emit(SliderEvent::TouchMoveOpposite, event);
        }
        return MoveOutcome::NoSession;
    }
    if session.is_touch_input && !event.is_touch() {
        return MoveOutcome::InputMismatch;
    }
    let Some(position) = event.page_position() else {
        log::warn!("move sample without usable coordinates on {:?}", event.target);
        return MoveOutcome::MissingCoordinates;
    };
    if event.is_claimed_by_other(id) {
        // The nested slider owns this sample; follow the contact so the
        // delta starts fresh if the gesture is handed over.
        session.start.position = position;
        session.current = position;
        return MoveOutcome::ClaimedByNested;
    }

    let params = MoveParams::read(slider);

    if !params.allow_touch_move {
        session.rebaseline(position);
        return MoveOutcome::DragDisabled;
    }
    if session.is_touch_input
        && params.release_on_edges
        && pushes_past_reached_bound(slider, params.orientation, session.start.position, position)
    {
        log::debug!("drag pushes past a reached bound, releasing gesture");
        session.close();
        return MoveOutcome::EdgeReleased;
    }
    if session.is_touch_input && env.focused_form_control() == Some(event.target) {
        session.moved = true;
        return MoveOutcome::FormControlFocused;
    }

    if session.allow_callbacks {
        slider.emit(SliderEvent::TouchMove, event);
    }
    if event.contact_count() > 1 {
        return MoveOutcome::MultiTouch;
    }

    session.current = position;
    let delta = session.delta();
    if params.threshold > 0.0 && !session.threshold_passed && delta.length() < params.threshold {
        return MoveOutcome::BelowThreshold;
    }

    if !session.scrolling.is_decided() {
        session.scrolling = classify_scroll(params.orientation, delta, params.touch_angle);
        if session.scrolling.is_decided() {
            log::debug!("gesture resolved as {:?}", session.scrolling);
        }
    }
    if session.scrolling.is_scrolling() {
        slider.emit(SliderEvent::TouchMoveOpposite, event);
    }
    if session.start_moving == MovementState::Unknown && delta != Point::ZERO {
        session.start_moving = MovementState::Moving;
    }
    if session.scrolling.is_scrolling() {
        session.touched = false;
        return MoveOutcome::Scrolling;
    }
    if session.start_moving != MovementState::Moving {
        return MoveOutcome::AwaitingMovement;
    }

    event.prevent_default();
    if params.stop_propagation {
        event.stop_propagation();
    }

    if !session.moved {
        begin_drag(session, slider, &params, event);
    }
    slider.emit(SliderEvent::SliderMove, event);
    session.moved = true;

    session.diff = axis_component(params.orientation, delta);
    let mut diff = session.diff * params.touch_ratio;
    if params.rtl {
        diff = -diff;
    }
    session.direction = if diff > 0.0 {
        SwipeDirection::Prev
    } else {
        SwipeDirection::Next
    };

    let bounds = TranslateBounds {
        min: slider.min_translate(),
        max: slider.max_translate(),
    };
    let edge = apply_edge_resistance(session.start_translate, diff, bounds, params.resistance);
    if edge.consumes_input {
        event.claim(id);
    }
    session.current_translate = apply_direction_lock(
        edge.translate,
        session.start_translate,
        session.direction,
        params.allowed,
    );

    if params.threshold > 0.0 && !session.threshold_passed {
        session.current_translate = session.start_translate;
        if diff.abs() <= params.threshold {
            return MoveOutcome::ThresholdHeld;
        }
        // Restart the gesture from the confirming sample so content does not
        // jump by the threshold distance.
        session.threshold_passed = true;
        session.start.position = session.current;
        session.diff = axis_component(params.orientation, session.delta());
        log::debug!("drag threshold passed, gesture re-baselined");
        return MoveOutcome::ThresholdLatched;
    }

    let translate = session.current_translate;
    if !params.follow_finger {
        return MoveOutcome::Dragged {
            translate,
            applied: false,
        };
    }
    log::trace!("drag translate {translate} (diff {diff})");
    slider.set_translate(translate);
    MoveOutcome::Dragged {
        translate,
        applied: true,
    }
}

/// Decides whether the contact is scrolling the page or dragging the slider.
///
/// A contact with no cross-axis movement is a drag right away. Otherwise the
/// decision waits for five pixels of travel and then compares the movement
/// angle against `touch_angle`.
pub fn classify_scroll(orientation: Orientation, delta: Point, touch_angle: f32) -> ScrollIntent {
    let cross_axis = match orientation {
        Orientation::Horizontal => delta.y,
        Orientation::Vertical => delta.x,
    };
    if cross_axis == 0.0 {
        return ScrollIntent::Dragging;
    }
    if delta.length_squared() < SCROLL_DECISION_DISTANCE_SQ {
        return ScrollIntent::Undecided;
    }

    let angle = delta.y.abs().atan2(delta.x.abs()).to_degrees();
    let scrolling = match orientation {
        Orientation::Horizontal => angle > touch_angle,
        Orientation::Vertical => 90.0 - angle > touch_angle,
    };
    if scrolling {
        ScrollIntent::Scrolling
    } else {
        ScrollIntent::Dragging
    }
}

fn axis_component(orientation: Orientation, point: Point) -> f32 {
    match orientation {
        Orientation::Horizontal => point.x,
        Orientation::Vertical => point.y,
    }
}

/// Whether the sample moves further outward while the content already rests
/// on the bound in that direction.
fn pushes_past_reached_bound<S: Slider + ?Sized>(
    slider: &S,
    orientation: Orientation,
    start: Point,
    position: Point,
) -> bool {
    let from = axis_component(orientation, start);
    let to = axis_component(orientation, position);
    let translate = slider.translate();
    (to < from && translate <= slider.max_translate())
        || (to > from && translate >= slider.min_translate())
}

/// Side effects of the first accepted drag sample of a session.
fn begin_drag<S: Slider + ?Sized>(
    session: &mut GestureSession,
    slider: &mut S,
    params: &MoveParams,
    event: &InputEvent,
) {
    session.start_translate = slider.translate();
    slider.set_transition(Duration::ZERO);
    if slider.is_animating() {
        slider.finish_transition();
    }
    session.allow_momentum_bounce = false;
    if params.grab_cursor && params.allowed.any() {
        slider.set_grab_cursor(true);
        session.grab_cursor_active = true;
    }
    slider.emit(SliderEvent::SliderFirstMove, event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_horizontal_move_is_a_drag() {
        // atan2(2, 30) is about 3.8 degrees.
        let intent = classify_scroll(Orientation::Horizontal, Point::new(30.0, 2.0), 45.0);
        assert_eq!(intent, ScrollIntent::Dragging);
    }

    #[test]
    fn steep_horizontal_move_is_a_scroll() {
        // atan2(30, 2) is about 86 degrees.
        let intent = classify_scroll(Orientation::Horizontal, Point::new(2.0, 30.0), 45.0);
        assert_eq!(intent, ScrollIntent::Scrolling);
    }

    #[test]
    fn zero_cross_axis_resolves_immediately() {
        assert_eq!(
            classify_scroll(Orientation::Horizontal, Point::new(1.0, 0.0), 45.0),
            ScrollIntent::Dragging
        );
        assert_eq!(
            classify_scroll(Orientation::Vertical, Point::new(0.0, -1.0), 45.0),
            ScrollIntent::Dragging
        );
    }

    #[test]
    fn short_moves_stay_undecided() {
        // 3² + 3² = 18 < 25
        assert_eq!(
            classify_scroll(Orientation::Horizontal, Point::new(3.0, 3.0), 45.0),
            ScrollIntent::Undecided
        );
        // 3² + 4² = 25 decides
        assert!(classify_scroll(Orientation::Horizontal, Point::new(4.0, 3.0), 45.0).is_decided());
    }

    #[test]
    fn vertical_slider_mirrors_the_angle() {
        assert_eq!(
            classify_scroll(Orientation::Vertical, Point::new(2.0, 30.0), 45.0),
            ScrollIntent::Dragging
        );
        assert_eq!(
            classify_scroll(Orientation::Vertical, Point::new(30.0, 2.0), 45.0),
            ScrollIntent::Scrolling
        );
    }

    #[test]
    fn touch_angle_sets_the_boundary() {
        // atan2(10, 20) is about 26.6 degrees.
        let delta = Point::new(-20.0, 10.0);
        assert_eq!(
            classify_scroll(Orientation::Horizontal, delta, 30.0),
            ScrollIntent::Dragging
        );
        assert_eq!(
            classify_scroll(Orientation::Horizontal, delta, 20.0),
            ScrollIntent::Scrolling
        );
    }
}

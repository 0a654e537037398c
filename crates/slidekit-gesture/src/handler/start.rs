//! Opens a gesture session on initial contact.

use super::outcome::{StartOutcome, StartRejection};
use crate::input::{InputEvent, TouchEnvironment};
use crate::session::GestureSession;
use crate::slider::{Slider, SliderEvent};
use slidekit_graphics::Point;

pub(crate) fn handle_start<S: Slider + ?Sized>(
    session: &mut GestureSession,
    slider: &mut S,
    env: &mut TouchEnvironment<'_>,
    event: &InputEvent,
) -> StartOutcome {
    let position = match check_start(session, slider, env, event) {
        Ok(position) => position,
        Err(rejection) => {
            log::debug!("touch start rejected: {rejection:?}");
            return StartOutcome::Rejected(rejection);
        }
    };

    *session = GestureSession::open(position, event.is_touch(), slider.translate());
    slider.update_size();
    log::debug!(
        "gesture session opened at ({}, {}), touch: {}",
        position.x,
        position.y,
        session.is_touch_input
    );

    if !event.is_touch() {
        suppress_default_action(slider, env, event);
    }

    slider.emit(SliderEvent::TouchStart, event);
    StartOutcome::Accepted
}

/// Runs the rejection rules in order and returns the contact position when
/// none of them applies.
fn check_start<S: Slider + ?Sized>(
    session: &GestureSession,
    slider: &S,
    env: &TouchEnvironment<'_>,
    event: &InputEvent,
) -> Result<Point, StartRejection> {
    let config = slider.touch_config();

    if slider.is_animating() && config.prevent_interaction_on_transition {
        return Err(StartRejection::AnimatingTransition);
    }
    if !event.is_touch() && event.is_secondary_button() {
        return Err(StartRejection::SecondaryButton);
    }
    if session.is_dragging() {
        return Err(StartRejection::GestureInProgress);
    }
    if let Some(selector) = config.no_swiping_target() {
        if env.elements.closest(event.target, &selector).is_some() {
            return Err(StartRejection::NoSwipingTarget);
        }
    }
    if let Some(handler) = &config.swipe_handler {
        if env.elements.closest(event.target, handler).is_none() {
            return Err(StartRejection::OutsideSwipeHandler);
        }
    }

    let Some(position) = event.page_position() else {
        log::warn!("touch start without usable coordinates on {:?}", event.target);
        return Err(StartRejection::MissingCoordinates);
    };

    if config.edge_swipe_detection
        && in_edge_zone(position.x, config.edge_swipe_threshold, env.screen_width)
    {
        return Err(StartRejection::EdgeSwipeZone);
    }

    Ok(position)
}

/// Whether `x` falls within `margin` of either screen edge.
fn in_edge_zone(x: f32, margin: f32, screen_width: f32) -> bool {
    x <= margin || x >= screen_width - margin
}

/// Keeps pointer input from selecting text or dragging images while it may
/// turn into a swipe. Form controls keep their default behavior.
fn suppress_default_action<S: Slider + ?Sized>(
    slider: &S,
    env: &mut TouchEnvironment<'_>,
    event: &InputEvent,
) {
    let config = slider.touch_config();
    let target_is_form_control = env.elements.is_form_control(event.target);
    let suppress = config.touch_start_force_prevent_default
        || (!target_is_form_control
            && config.allow_touch_move
            && config.touch_start_prevent_default);
    if !suppress {
        return;
    }

    if let Some(focused) = env.focused_form_control() {
        if focused != event.target {
            env.focus.blur(focused);
        }
    }
    event.prevent_default();
}

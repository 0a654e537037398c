//! Acceptance and rejection of touch and pointer start events.

use slidekit_gesture::{
    InputEvent, InputEventKind, PointerButton, PointerType, SliderEvent, StartOutcome,
    StartRejection, TouchConfig,
};
use slidekit_graphics::Point;
use slidekit_testing::{GestureRobot, RecordingSlider, SliderCall};

fn robot(config: TouchConfig) -> GestureRobot {
    GestureRobot::new(RecordingSlider::horizontal(config, 1000.0).at_translate(-500.0))
}

#[test]
fn touch_start_opens_a_session() {
    let mut robot = robot(TouchConfig::default());

    assert_eq!(robot.touch_down(120.0, 80.0), StartOutcome::Accepted);

    let session = robot.session();
    assert!(session.touched);
    assert!(!session.moved);
    assert!(session.is_touch_input);
    assert!(session.allow_callbacks);
    assert_eq!(session.start.position, Point::new(120.0, 80.0));
    assert_eq!(session.start_translate, -500.0);
    assert_eq!(
        robot.slider().calls,
        vec![
            SliderCall::UpdateSize,
            SliderCall::Emit(SliderEvent::TouchStart)
        ]
    );
}

#[test]
fn touch_start_never_prevents_default() {
    let mut robot = robot(TouchConfig::default());
    let event = InputEvent::touch(
        InputEventKind::Start,
        &[Point::new(120.0, 80.0)],
        robot.target(),
    );
    assert!(robot.dispatch_start(&event).is_accepted());
    assert!(!event.is_default_prevented());
}

#[test]
fn rejects_while_animating_when_configured() {
    let config = TouchConfig::default().with_prevent_interaction_on_transition(true);
    let mut robot = GestureRobot::new(
        RecordingSlider::horizontal(config, 1000.0).with_animating(true),
    );

    assert_eq!(
        robot.touch_down(120.0, 80.0),
        StartOutcome::Rejected(StartRejection::AnimatingTransition)
    );
    assert!(!robot.session().touched);
    assert!(robot.slider().calls.is_empty());
}

#[test]
fn animation_alone_does_not_block_interaction() {
    let mut robot = GestureRobot::new(
        RecordingSlider::horizontal(TouchConfig::default(), 1000.0).with_animating(true),
    );
    assert_eq!(robot.touch_down(120.0, 80.0), StartOutcome::Accepted);
}

#[test]
fn pen_input_follows_pointer_rules() {
    let mut robot = robot(TouchConfig::default());
    let event = InputEvent::mouse(InputEventKind::Start, Point::new(120.0, 80.0), robot.target())
        .with_pointer_type(PointerType::Pen);

    assert!(robot.dispatch_start(&event).is_accepted());
    assert!(!robot.session().is_touch_input);
    assert!(event.is_default_prevented());
}

#[test]
fn rejects_secondary_mouse_button() {
    let mut robot = robot(TouchConfig::default());
    let event = InputEvent::mouse(InputEventKind::Start, Point::new(120.0, 80.0), robot.target())
        .with_button(Some(PointerButton::Secondary));

    assert_eq!(
        robot.dispatch_start(&event),
        StartOutcome::Rejected(StartRejection::SecondaryButton)
    );
    assert!(robot.slider().calls.is_empty());
}

#[test]
fn second_contact_cannot_reopen_a_moving_gesture() {
    let mut robot = robot(TouchConfig::default());
    robot.touch_down(200.0, 100.0);
    robot.touch_move(150.0, 100.0);
    assert!(robot.session().moved);

    assert_eq!(
        robot.touch_down(300.0, 100.0),
        StartOutcome::Rejected(StartRejection::GestureInProgress)
    );
    assert_eq!(robot.session().start.position, Point::new(200.0, 100.0));
}

#[test]
fn touched_but_unmoved_session_can_restart() {
    let mut robot = robot(TouchConfig::default());
    robot.touch_down(200.0, 100.0);
    assert_eq!(robot.touch_down(250.0, 120.0), StartOutcome::Accepted);
    assert_eq!(robot.session().start.position, Point::new(250.0, 120.0));
}

#[test]
fn rejects_targets_inside_no_swiping_class() {
    let mut robot = robot(TouchConfig::default());
    let locked = {
        let doc = robot.document_mut();
        let locked = doc.add(doc.root(), "div", &["swiper-no-swiping"]);
        doc.add(locked, "span", &[])
    };
    robot.set_target(locked);

    assert_eq!(
        robot.touch_down(120.0, 80.0),
        StartOutcome::Rejected(StartRejection::NoSwipingTarget)
    );
    assert!(robot.slider().calls.is_empty());
}

#[test]
fn explicit_no_swiping_selector_replaces_the_class() {
    let mut robot = robot(TouchConfig::default().with_no_swiping_selector("textarea"));
    let (classed, textarea) = {
        let doc = robot.document_mut();
        let classed = doc.add(doc.root(), "div", &["swiper-no-swiping"]);
        let textarea = doc.add(doc.root(), "textarea", &[]);
        (classed, textarea)
    };

    robot.set_target(textarea);
    assert_eq!(
        robot.touch_down(120.0, 80.0),
        StartOutcome::Rejected(StartRejection::NoSwipingTarget)
    );

    robot.set_target(classed);
    assert_eq!(robot.touch_down(120.0, 80.0), StartOutcome::Accepted);
}

#[test]
fn swipe_handler_scopes_where_gestures_may_start() {
    let mut robot = robot(TouchConfig::default().with_swipe_handler(".handle"));
    let grip = {
        let doc = robot.document_mut();
        let handle = doc.add(doc.root(), "div", &["handle"]);
        doc.add(handle, "span", &["grip"])
    };

    assert_eq!(
        robot.touch_down(120.0, 80.0),
        StartOutcome::Rejected(StartRejection::OutsideSwipeHandler)
    );

    robot.set_target(grip);
    assert_eq!(robot.touch_down(120.0, 80.0), StartOutcome::Accepted);
}

#[test]
fn edge_swipe_zone_rejects_both_margins() {
    let mut robot =
        robot(TouchConfig::default().with_edge_swipe_detection(20.0)).with_screen_width(400.0);

    for x in [0.0, 10.0, 20.0, 380.0, 395.0] {
        assert_eq!(
            robot.touch_down(x, 100.0),
            StartOutcome::Rejected(StartRejection::EdgeSwipeZone),
            "x = {x}"
        );
    }
    for x in [21.0, 200.0, 379.0] {
        assert_eq!(robot.touch_down(x, 100.0), StartOutcome::Accepted, "x = {x}");
        robot.release();
    }
}

#[test]
fn edge_zone_is_ignored_when_detection_is_off() {
    let mut robot = robot(TouchConfig::default()).with_screen_width(400.0);
    assert_eq!(robot.touch_down(5.0, 100.0), StartOutcome::Accepted);
}

#[test]
fn start_without_coordinates_is_ignored() {
    let mut robot = robot(TouchConfig::default());
    let event = InputEvent::touch(InputEventKind::Start, &[], robot.target());

    assert_eq!(
        robot.dispatch_start(&event),
        StartOutcome::Rejected(StartRejection::MissingCoordinates)
    );
    assert!(!robot.session().touched);
}

#[test]
fn mouse_start_suppresses_default_and_blurs_focused_control() {
    let mut robot = robot(TouchConfig::default());
    let input = {
        let doc = robot.document_mut();
        let input = doc.add(doc.root(), "input", &[]);
        doc.focus(input);
        input
    };
    let event = InputEvent::mouse(InputEventKind::Start, Point::new(120.0, 80.0), robot.target());

    assert!(robot.dispatch_start(&event).is_accepted());
    assert!(event.is_default_prevented());
    assert_eq!(robot.document().blurred(), &[input]);
    assert_eq!(robot.document().focused(), None);
}

#[test]
fn mouse_start_on_form_control_keeps_default() {
    let mut robot = robot(TouchConfig::default());
    let input = {
        let doc = robot.document_mut();
        let input = doc.add(doc.root(), "input", &[]);
        doc.focus(input);
        input
    };
    robot.set_target(input);
    let event = InputEvent::mouse(InputEventKind::Start, Point::new(120.0, 80.0), input);

    assert!(robot.dispatch_start(&event).is_accepted());
    assert!(!event.is_default_prevented());
    assert!(robot.document().blurred().is_empty());
    assert_eq!(robot.document().focused(), Some(input));
}

#[test]
fn force_prevent_default_applies_to_form_controls() {
    let config = TouchConfig {
        touch_start_force_prevent_default: true,
        ..TouchConfig::default()
    };
    let mut robot = robot(config);
    let input = {
        let doc = robot.document_mut();
        doc.add(doc.root(), "input", &[])
    };
    robot.set_target(input);
    let event = InputEvent::mouse(InputEventKind::Start, Point::new(120.0, 80.0), input);

    assert!(robot.dispatch_start(&event).is_accepted());
    assert!(event.is_default_prevented());
}

#[test]
fn prevent_default_can_be_disabled() {
    let config = TouchConfig {
        touch_start_prevent_default: false,
        ..TouchConfig::default()
    };
    let mut robot = robot(config);
    let event = InputEvent::mouse(InputEventKind::Start, Point::new(120.0, 80.0), robot.target());

    assert!(robot.dispatch_start(&event).is_accepted());
    assert!(!event.is_default_prevented());
}

use slidekit_graphics::Point;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

/// Opaque handle to an element of the host's element tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

/// Identity of one slider instance. Used to tell apart claims made by nested
/// sliders that see the same input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SliderId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEventKind {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerType {
    Touch,
    Mouse,
    Pen,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

/// Contacts currently on the target. Almost always one or two.
pub type TouchList = SmallVec<[Point; 2]>;

/// Marker left on an input event by the slider that consumed it.
///
/// A slider nested inside another sees an event first. When it keeps the
/// gesture to itself it claims the event, and the enclosing slider skips it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputClaim {
    pub owner: SliderId,
}

/// State shared by every copy of one platform event.
#[derive(Debug, Default)]
struct EventState {
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
    claim: Cell<Option<InputClaim>>,
}

/// Platform pointer or touch event as seen by the gesture handlers.
///
/// Clones share their prevent-default, stop-propagation and claim state via
/// `Rc`, so a parent slider observes what a nested slider did to the event.
#[derive(Clone, Debug)]
pub struct InputEvent {
    pub kind: InputEventKind,
    pub pointer_type: PointerType,
    /// Pointer position for mouse and pen input.
    pub position: Option<Point>,
    /// Contacts on the target element for touch input.
    pub touches: TouchList,
    pub button: Option<PointerButton>,
    pub target: ElementId,
    state: Rc<EventState>,
}

impl InputEvent {
    /// Creates a mouse event at `position`, pressed with the primary button.
    pub fn mouse(kind: InputEventKind, position: Point, target: ElementId) -> Self {
        Self {
            kind,
            pointer_type: PointerType::Mouse,
            position: Some(position),
            touches: TouchList::new(),
            button: Some(PointerButton::Primary),
            target,
            state: Rc::new(EventState::default()),
        }
    }

    /// Creates a touch event with the given contacts on the target.
    pub fn touch(kind: InputEventKind, touches: &[Point], target: ElementId) -> Self {
        Self {
            kind,
            pointer_type: PointerType::Touch,
            position: None,
            touches: touches.iter().copied().collect(),
            button: None,
            target,
            state: Rc::new(EventState::default()),
        }
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    pub fn with_button(mut self, button: Option<PointerButton>) -> Self {
        self.button = button;
        self
    }

    pub fn is_touch(&self) -> bool {
        self.pointer_type == PointerType::Touch
    }

    /// Page coordinates of the tracked contact.
    ///
    /// Touch events report their first contact on the target. Returns `None`
    /// when the event carries no usable coordinates.
    pub fn page_position(&self) -> Option<Point> {
        let point = if self.is_touch() {
            self.touches.first().copied()
        } else {
            self.position
        }?;
        point.is_finite().then_some(point)
    }

    /// Number of simultaneous contacts; pointer input counts as one.
    pub fn contact_count(&self) -> usize {
        if self.is_touch() {
            self.touches.len()
        } else {
            1
        }
    }

    /// Whether a button other than the primary one is pressed.
    pub fn is_secondary_button(&self) -> bool {
        matches!(self.button, Some(button) if button != PointerButton::Primary)
    }

    pub fn prevent_default(&self) {
        self.state.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.state.default_prevented.get()
    }

    pub fn stop_propagation(&self) {
        self.state.propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.state.propagation_stopped.get()
    }

    /// Claims the event for `owner`. The first claim wins.
    pub fn claim(&self, owner: SliderId) {
        if self.state.claim.get().is_none() {
            self.state.claim.set(Some(InputClaim { owner }));
        }
    }

    pub fn claim_of(&self) -> Option<InputClaim> {
        self.state.claim.get()
    }

    /// Returns true if a slider other than `slider` already claimed this event.
    pub fn is_claimed_by_other(&self, slider: SliderId) -> bool {
        matches!(self.claim_of(), Some(claim) if claim.owner != slider)
    }
}

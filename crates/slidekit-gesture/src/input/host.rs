//! Host capabilities the gesture handlers query.
//!
//! Element lookups and keyboard focus belong to the host platform, not to the
//! slider. They are injected per call so the handlers never reach for global
//! state.

use super::types::ElementId;

/// Read access to the host's element tree.
pub trait ElementTree {
    /// Returns the nearest element, starting at `element` itself and walking
    /// up through its ancestors, that matches `selector`.
    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId>;

    /// Whether `element` is a form control (input, select, textarea, ...).
    fn is_form_control(&self, element: ElementId) -> bool;
}

/// Keyboard focus registry of the host.
pub trait FocusProvider {
    /// The element that currently has keyboard focus, if any.
    fn focused_element(&self) -> Option<ElementId>;

    /// Removes keyboard focus from `element`.
    fn blur(&mut self, element: ElementId);
}

/// Everything outside the slider that a gesture handler consults.
pub struct TouchEnvironment<'a> {
    pub elements: &'a dyn ElementTree,
    pub focus: &'a mut dyn FocusProvider,
    /// Width of the physical screen, used by edge swipe detection.
    pub screen_width: f32,
}

impl<'a> TouchEnvironment<'a> {
    pub fn new(
        elements: &'a dyn ElementTree,
        focus: &'a mut dyn FocusProvider,
        screen_width: f32,
    ) -> Self {
        Self {
            elements,
            focus,
            screen_width,
        }
    }

    /// The focused element, when it is a form control.
    pub fn focused_form_control(&self) -> Option<ElementId> {
        self.focus
            .focused_element()
            .filter(|element| self.elements.is_form_control(*element))
    }
}

//! In-memory element tree with keyboard focus.
//!
//! Supports the selector forms the handlers are configured with in tests:
//! `.class` and bare tag names.

use slidekit_gesture::{ElementId, ElementTree, FocusProvider, TouchEnvironment};
use std::collections::HashMap;

/// Tags treated as form controls.
const FORM_CONTROL_TAGS: &[&str] = &[
    "input", "select", "option", "textarea", "button", "video", "label",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementNode {
    pub tag: String,
    pub classes: Vec<String>,
    pub parent: Option<ElementId>,
}

impl ElementNode {
    fn matches(&self, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => self.classes.iter().any(|own| own == class),
            None => self.tag == selector,
        }
    }
}

/// Element tree half of the document.
#[derive(Debug, Default)]
pub struct ElementStore {
    elements: HashMap<ElementId, ElementNode>,
    next_id: u64,
}

impl ElementTree for ElementStore {
    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId> {
        let mut current = Some(element);
        while let Some(id) = current {
            let node = self.elements.get(&id)?;
            if node.matches(selector) {
                return Some(id);
            }
            current = node.parent;
        }
        None
    }

    fn is_form_control(&self, element: ElementId) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|node| FORM_CONTROL_TAGS.contains(&node.tag.as_str()))
    }
}

/// Focus half of the document. Records every blur.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<ElementId>,
    blurred: Vec<ElementId>,
}

impl FocusProvider for FocusState {
    fn focused_element(&self) -> Option<ElementId> {
        self.focused
    }

    fn blur(&mut self, element: ElementId) {
        if self.focused == Some(element) {
            self.focused = None;
        }
        self.blurred.push(element);
    }
}

/// Element tree plus focus, kept apart so a [`TouchEnvironment`] can borrow
/// both at once.
#[derive(Debug)]
pub struct FakeDocument {
    pub elements: ElementStore,
    pub focus: FocusState,
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDocument {
    /// Creates a document holding a single `body` element.
    pub fn new() -> Self {
        let mut elements = ElementStore {
            elements: HashMap::new(),
            next_id: 1,
        };
        elements.elements.insert(
            ElementId(0),
            ElementNode {
                tag: "body".to_string(),
                ..ElementNode::default()
            },
        );
        Self {
            elements,
            focus: FocusState::default(),
        }
    }

    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Appends an element under `parent` and returns its id.
    pub fn add(&mut self, parent: ElementId, tag: &str, classes: &[&str]) -> ElementId {
        let id = ElementId(self.elements.next_id);
        self.elements.next_id += 1;
        self.elements.elements.insert(
            id,
            ElementNode {
                tag: tag.to_string(),
                classes: classes.iter().map(|class| class.to_string()).collect(),
                parent: Some(parent),
            },
        );
        id
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementNode> {
        self.elements.elements.get(&id)
    }

    pub fn focus(&mut self, id: ElementId) {
        self.focus.focused = Some(id);
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focus.focused
    }

    /// Elements that lost focus through [`FocusProvider::blur`], in order.
    pub fn blurred(&self) -> &[ElementId] {
        &self.focus.blurred
    }

    pub fn environment(&mut self, screen_width: f32) -> TouchEnvironment<'_> {
        TouchEnvironment::new(&self.elements, &mut self.focus, screen_width)
    }
}

pub mod host;
pub mod types;

pub use host::{ElementTree, FocusProvider, TouchEnvironment};
pub use types::{
    ElementId, InputClaim, InputEvent, InputEventKind, PointerButton, PointerType, SliderId,
    TouchList,
};

pub mod prelude {
    pub use super::host::{ElementTree, FocusProvider, TouchEnvironment};
    pub use super::types::{
        ElementId, InputEvent, InputEventKind, PointerButton, PointerType, SliderId,
    };
}

//! Keeps content from moving toward a navigation direction that is disabled.

use crate::session::SwipeDirection;

/// Navigation directions the slider currently allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllowedDirections {
    pub next: bool,
    pub prev: bool,
}

impl AllowedDirections {
    pub fn any(self) -> bool {
        self.next || self.prev
    }
}

/// Clamps `translate` at `start_translate` when it moved toward a disabled
/// direction. Runs after the edge policy so a lock always wins.
pub fn apply_direction_lock(
    translate: f32,
    start_translate: f32,
    direction: SwipeDirection,
    allowed: AllowedDirections,
) -> f32 {
    match direction {
        SwipeDirection::Next if !allowed.next && translate < start_translate => start_translate,
        SwipeDirection::Prev if !allowed.prev && translate > start_translate => start_translate,
        _ => translate,
    }
}

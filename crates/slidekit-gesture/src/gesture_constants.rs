//! Shared gesture constants for consistent touch/pointer handling.
//!
//! All distances are in logical pixels of page coordinates.

/// Squared displacement a contact must cover before the scroll/drag decision
/// is made from its angle. Five pixels of travel, compared without a square
/// root.
pub const SCROLL_DECISION_DISTANCE_SQ: f32 = 25.0;

/// Default boundary, in degrees, between a drag along the slider axis and a
/// page scroll across it.
pub const DEFAULT_TOUCH_ANGLE: f32 = 45.0;

/// Default exponent of the rubber-band curve past the content bounds.
pub const DEFAULT_RESISTANCE_RATIO: f32 = 0.85;

/// Default width of the screen-edge margin ignored when edge swipe
/// detection is on. Matches the width of the iOS back-swipe zone.
pub const DEFAULT_EDGE_SWIPE_THRESHOLD: f32 = 20.0;

/// Class that opts an element and its descendants out of swiping when no
/// explicit selector is configured.
pub const DEFAULT_NO_SWIPING_CLASS: &str = "swiper-no-swiping";

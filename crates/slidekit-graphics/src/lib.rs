//! Pure geometry for slidekit
//!
//! Points in page coordinates (logical pixels) used by the
//! gesture crate and its test harness.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::Point;
}

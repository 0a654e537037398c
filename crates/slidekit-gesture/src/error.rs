//! Error types for touch configuration.

use thiserror::Error;

/// Errors reported by [`TouchConfig::validated`](crate::TouchConfig::validated).
///
/// Gesture handling itself never fails; only an inconsistent configuration is
/// reported as an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Threshold is negative or not a finite number.
    #[error("threshold must be a finite, non-negative distance, got {value}")]
    InvalidThreshold { value: f32 },

    /// Touch angle lies outside the first quadrant.
    #[error("touch angle must be between 0 and 90 degrees, got {value}")]
    InvalidTouchAngle { value: f32 },

    /// Resistance ratio would not produce a sub-linear curve.
    #[error("resistance ratio must be between 0 and 1, got {value}")]
    InvalidResistanceRatio { value: f32 },

    /// Touch ratio is NaN or infinite.
    #[error("touch ratio must be finite, got {value}")]
    InvalidTouchRatio { value: f32 },

    /// Edge swipe margin is negative or not a finite number.
    #[error("edge swipe threshold must be a finite, non-negative distance, got {value}")]
    InvalidEdgeSwipeThreshold { value: f32 },
}

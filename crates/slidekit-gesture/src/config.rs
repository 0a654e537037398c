//! Touch configuration read by the gesture handlers.
//!
//! The configuration belongs to the slider; handlers only read it. Values are
//! plain public fields with chainable `with_*` setters for the common knobs.

use crate::error::ConfigError;
use crate::gesture_constants::{
    DEFAULT_EDGE_SWIPE_THRESHOLD, DEFAULT_NO_SWIPING_CLASS, DEFAULT_RESISTANCE_RATIO,
    DEFAULT_TOUCH_ANGLE,
};

/// Configuration surface for touch and pointer dragging.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchConfig {
    /// Distance a contact must travel before the content starts following it.
    /// Zero disables the threshold.
    pub threshold: f32,
    /// Angle in degrees separating a drag along the slider axis from a page
    /// scroll across it.
    pub touch_angle: f32,
    /// Scale applied to finger displacement before it moves the content.
    pub touch_ratio: f32,
    /// Rubber-band damping when dragging past the content bounds.
    pub resistance: bool,
    /// Exponent of the rubber-band curve.
    pub resistance_ratio: f32,
    /// Whether content tracks the contact during the drag.
    pub follow_finger: bool,
    /// End the gesture instead of damping it when a drag pushes past a bound
    /// that is already reached.
    pub touch_release_on_edges: bool,
    pub r#loop: bool,
    pub allow_touch_move: bool,
    pub allow_slide_next: bool,
    pub allow_slide_prev: bool,
    pub edge_swipe_detection: bool,
    pub edge_swipe_threshold: f32,
    pub no_swiping: bool,
    pub no_swiping_selector: Option<String>,
    pub no_swiping_class: String,
    /// Only contacts starting inside an element matching this selector may
    /// start a gesture.
    pub swipe_handler: Option<String>,
    pub touch_move_stop_propagation: bool,
    /// Let move events bubble so an enclosing slider can react as well.
    pub nested: bool,
    pub touch_start_prevent_default: bool,
    pub touch_start_force_prevent_default: bool,
    pub prevent_interaction_on_transition: bool,
    pub grab_cursor: bool,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            touch_angle: DEFAULT_TOUCH_ANGLE,
            touch_ratio: 1.0,
            resistance: true,
            resistance_ratio: DEFAULT_RESISTANCE_RATIO,
            follow_finger: true,
            touch_release_on_edges: false,
            r#loop: false,
            allow_touch_move: true,
            allow_slide_next: true,
            allow_slide_prev: true,
            edge_swipe_detection: false,
            edge_swipe_threshold: DEFAULT_EDGE_SWIPE_THRESHOLD,
            no_swiping: true,
            no_swiping_selector: None,
            no_swiping_class: DEFAULT_NO_SWIPING_CLASS.to_string(),
            swipe_handler: None,
            touch_move_stop_propagation: true,
            nested: false,
            touch_start_prevent_default: true,
            touch_start_force_prevent_default: false,
            prevent_interaction_on_transition: false,
            grab_cursor: false,
        }
    }
}

impl TouchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_touch_angle(mut self, degrees: f32) -> Self {
        self.touch_angle = degrees;
        self
    }

    pub fn with_touch_ratio(mut self, ratio: f32) -> Self {
        self.touch_ratio = ratio;
        self
    }

    /// Enables or disables rubber-band resistance with the given exponent.
    pub fn with_resistance(mut self, enabled: bool, ratio: f32) -> Self {
        self.resistance = enabled;
        self.resistance_ratio = ratio;
        self
    }

    pub fn with_follow_finger(mut self, follow: bool) -> Self {
        self.follow_finger = follow;
        self
    }

    pub fn with_touch_release_on_edges(mut self, release: bool) -> Self {
        self.touch_release_on_edges = release;
        self
    }

    pub fn with_loop(mut self, looped: bool) -> Self {
        self.r#loop = looped;
        self
    }

    pub fn with_allow_touch_move(mut self, allow: bool) -> Self {
        self.allow_touch_move = allow;
        self
    }

    pub fn with_allowed_directions(mut self, next: bool, prev: bool) -> Self {
        self.allow_slide_next = next;
        self.allow_slide_prev = prev;
        self
    }

    /// Ignores contacts that start within `threshold` pixels of either
    /// screen edge.
    pub fn with_edge_swipe_detection(mut self, threshold: f32) -> Self {
        self.edge_swipe_detection = true;
        self.edge_swipe_threshold = threshold;
        self
    }

    pub fn with_no_swiping_selector(mut self, selector: impl Into<String>) -> Self {
        self.no_swiping = true;
        self.no_swiping_selector = Some(selector.into());
        self
    }

    pub fn with_swipe_handler(mut self, selector: impl Into<String>) -> Self {
        self.swipe_handler = Some(selector.into());
        self
    }

    pub fn with_nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    pub fn with_grab_cursor(mut self, grab: bool) -> Self {
        self.grab_cursor = grab;
        self
    }

    pub fn with_prevent_interaction_on_transition(mut self, prevent: bool) -> Self {
        self.prevent_interaction_on_transition = prevent;
        self
    }

    /// Selector that marks elements where swiping must not start, if any.
    ///
    /// Falls back to the no-swiping class when no explicit selector is set.
    pub fn no_swiping_target(&self) -> Option<String> {
        if !self.no_swiping {
            return None;
        }
        match &self.no_swiping_selector {
            Some(selector) => Some(selector.clone()),
            None => Some(format!(".{}", self.no_swiping_class)),
        }
    }

    /// Resistance exponent in effect. Edge release replaces damping with a
    /// hard stop, so the exponent collapses to zero.
    pub fn effective_resistance_ratio(&self) -> f32 {
        if self.touch_release_on_edges {
            0.0
        } else {
            self.resistance_ratio
        }
    }

    /// Checks the numeric fields and returns the configuration unchanged when
    /// they are usable.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                value: self.threshold,
            });
        }
        if !(0.0..=90.0).contains(&self.touch_angle) {
            return Err(ConfigError::InvalidTouchAngle {
                value: self.touch_angle,
            });
        }
        if !(0.0..=1.0).contains(&self.resistance_ratio) {
            return Err(ConfigError::InvalidResistanceRatio {
                value: self.resistance_ratio,
            });
        }
        if !self.touch_ratio.is_finite() {
            return Err(ConfigError::InvalidTouchRatio {
                value: self.touch_ratio,
            });
        }
        if !self.edge_swipe_threshold.is_finite() || self.edge_swipe_threshold < 0.0 {
            return Err(ConfigError::InvalidEdgeSwipeThreshold {
                value: self.edge_swipe_threshold,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TouchConfig::default().validated().expect("defaults validate");
        assert_eq!(config.touch_angle, 45.0);
        assert_eq!(config.resistance_ratio, 0.85);
        assert!(config.follow_finger);
    }

    #[test]
    fn no_swiping_falls_back_to_class() {
        let config = TouchConfig::default();
        assert_eq!(
            config.no_swiping_target().as_deref(),
            Some(".swiper-no-swiping")
        );

        let config = config.with_no_swiping_selector("input[type=range]");
        assert_eq!(
            config.no_swiping_target().as_deref(),
            Some("input[type=range]")
        );

        let disabled = TouchConfig {
            no_swiping: false,
            ..TouchConfig::default()
        };
        assert_eq!(disabled.no_swiping_target(), None);
    }

    #[test]
    fn edge_release_zeroes_resistance_ratio() {
        let config = TouchConfig::default().with_resistance(true, 0.6);
        assert_eq!(config.effective_resistance_ratio(), 0.6);
        let config = config.with_touch_release_on_edges(true);
        assert_eq!(config.effective_resistance_ratio(), 0.0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            TouchConfig::default().with_threshold(-1.0).validated(),
            Err(ConfigError::InvalidThreshold { value: -1.0 })
        );
        assert_eq!(
            TouchConfig::default().with_touch_angle(120.0).validated(),
            Err(ConfigError::InvalidTouchAngle { value: 120.0 })
        );
        assert_eq!(
            TouchConfig::default().with_resistance(true, 1.5).validated(),
            Err(ConfigError::InvalidResistanceRatio { value: 1.5 })
        );
        assert!(matches!(
            TouchConfig::default()
                .with_touch_ratio(f32::NAN)
                .validated(),
            Err(ConfigError::InvalidTouchRatio { .. })
        ));
        assert_eq!(
            TouchConfig::default()
                .with_edge_swipe_detection(-5.0)
                .validated(),
            Err(ConfigError::InvalidEdgeSwipeThreshold { value: -5.0 })
        );
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ConfigError::InvalidTouchAngle { value: 95.0 };
        assert_eq!(
            err.to_string(),
            "touch angle must be between 0 and 90 degrees, got 95"
        );
    }
}

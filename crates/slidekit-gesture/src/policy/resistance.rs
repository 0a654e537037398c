//! Bounds the candidate translate against the slider limits.
//!
//! Inside the bounds the gesture belongs to this slider alone. Past a bound
//! the translate is either clamped or damped along a sub-linear curve, and an
//! enclosing slider is free to react to the same input.

/// Translate limits of the slider content.
///
/// `min` is the larger value (content at its start), `max` the smaller one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslateBounds {
    pub min: f32,
    pub max: f32,
}

/// Rubber-band settings in effect for the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resistance {
    pub enabled: bool,
    pub ratio: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeOutcome {
    pub translate: f32,
    /// True while the translate stays within the bounds, meaning an enclosing
    /// slider must not handle this input.
    pub consumes_input: bool,
}

/// Applies the edge policy to `start_translate + diff`.
///
/// `diff` is the scaled displacement along the slider axis.
pub fn apply_edge_resistance(
    start_translate: f32,
    diff: f32,
    bounds: TranslateBounds,
    resistance: Resistance,
) -> EdgeOutcome {
    let candidate = start_translate + diff;

    if diff > 0.0 && candidate > bounds.min {
        let translate = if resistance.enabled {
            bounds.min - 1.0 + (-bounds.min + start_translate + diff).powf(resistance.ratio)
        } else {
            bounds.min
        };
        return EdgeOutcome {
            translate,
            consumes_input: false,
        };
    }

    if diff < 0.0 && candidate < bounds.max {
        let translate = if resistance.enabled {
            bounds.max + 1.0 - (bounds.max - start_translate - diff).powf(resistance.ratio)
        } else {
            bounds.max
        };
        return EdgeOutcome {
            translate,
            consumes_input: false,
        };
    }

    EdgeOutcome {
        translate: candidate,
        consumes_input: true,
    }
}

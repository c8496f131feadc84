//! Linear slider ranges.

use pq_core::{Machine, Real};

pub const PERCENT_MIN: Real = 0.0;
pub const PERCENT_MAX: Real = 100.0;

/// Clamp a percentage to the slider stops `[0, 100]`.
///
/// NaN maps to the lower stop.
pub fn clamp_percent(value: Real) -> Real {
    if value.is_nan() {
        PERCENT_MIN
    } else {
        value.clamp(PERCENT_MIN, PERCENT_MAX)
    }
}

/// Maps `[0, 100] %` linearly onto `[min_value, max_value]`.
///
/// Ranges are only built from a validated [`Machine`], so the span is always
/// positive and finite.
///
/// # Example
///
/// ```
/// use pq_controls::ControllerRange;
/// use pq_core::Machine;
///
/// let range = ControllerRange::excitation(&Machine::default());
/// assert_eq!(range.scale(50.0), 0.0);
/// assert_eq!(range.scale(150.0), 35.0);
/// assert_eq!(range.percent_of(-35.0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerRange {
    min_value: Real,
    max_value: Real,
}

impl ControllerRange {
    /// Governor travel: `[0, P_max]`.
    pub fn governor(machine: &Machine) -> Self {
        Self {
            min_value: 0.0,
            max_value: machine.p_max_mw(),
        }
    }

    /// Excitation travel: `[-Q_max, +Q_max]`.
    pub fn excitation(machine: &Machine) -> Self {
        Self {
            min_value: -machine.q_max_mvar(),
            max_value: machine.q_max_mvar(),
        }
    }

    pub fn span(&self) -> Real {
        self.max_value - self.min_value
    }

    /// Value at a slider percentage (clamped to `[0, 100]` first).
    pub fn scale(&self, percent: Real) -> Real {
        let frac = clamp_percent(percent) / PERCENT_MAX;
        self.min_value + frac * self.span()
    }

    /// Slider percentage for a value, clamped to `[0, 100]`.
    pub fn percent_of(&self, value: Real) -> Real {
        clamp_percent((value - self.min_value) / self.span() * PERCENT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_percent_bounds() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(42.0), 42.0);
        assert_eq!(clamp_percent(250.0), 100.0);
        assert_eq!(clamp_percent(Real::NAN), 0.0);
        assert_eq!(clamp_percent(Real::INFINITY), 100.0);
        assert_eq!(clamp_percent(Real::NEG_INFINITY), 0.0);
    }

    #[test]
    fn governor_range_scales_linearly() {
        let r = ControllerRange::governor(&Machine::default());
        assert_eq!(r.scale(0.0), 0.0);
        assert_eq!(r.scale(50.0), 25.0);
        assert_eq!(r.scale(100.0), 50.0);
    }

    #[test]
    fn percent_of_is_clamped() {
        let r = ControllerRange::governor(&Machine::default());
        assert_eq!(r.percent_of(75.0), 100.0);
        assert_eq!(r.percent_of(-10.0), 0.0);
    }

    #[test]
    fn excitation_range_is_symmetric() {
        let m = Machine::new(80.0, 60.0, 40.0).unwrap();
        let r = ControllerRange::excitation(&m);
        assert_eq!(r.span(), 80.0);
        assert_eq!(r.scale(0.0), -40.0);
        assert_eq!(r.percent_of(0.0), 50.0);
    }
}

//! Machine rating constants.
//!
//! A [`Machine`] describes the capability region of the generator: the rating
//! circle of radius `S_rated` and the flat thermal bound `|Q| <= Q_max`.
//! It is validated once at construction and never mutated; a rating change
//! builds a new machine via [`Machine::with_rating`].

use crate::error::{PqError, PqResult};
use crate::numeric::{Real, ensure_finite};

#[cfg(feature = "serde")]
use serde::Serialize;

pub const DEFAULT_S_RATED_MVA: Real = 50.0;
pub const DEFAULT_P_MAX_MW: Real = 50.0;
pub const DEFAULT_Q_MAX_MVAR: Real = 35.0;

/// Immutable generator rating.
///
/// Invariants (checked by [`Machine::new`]):
/// - `s_rated > 0`, `p_max > 0`, `q_max > 0`, all finite
/// - `p_max <= s_rated` and `q_max <= s_rated` individually
///
/// There is no requirement that `p_max² + q_max² <= s_rated²`; the two axis
/// limits are independent clamps, not a simultaneous corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Machine {
    s_rated_mva: Real,
    p_max_mw: Real,
    q_max_mvar: Real,
}

impl Machine {
    /// Create a validated machine.
    ///
    /// # Errors
    ///
    /// Returns [`PqError::NonFinite`] for NaN or infinite values and
    /// [`PqError::InvalidMachineConfig`] if any value is non-positive, or if
    /// `p_max`/`q_max` exceeds `s_rated`.
    pub fn new(s_rated_mva: Real, p_max_mw: Real, q_max_mvar: Real) -> PqResult<Self> {
        check_positive(s_rated_mva, "S_rated_MVA", "S_rated_MVA must be positive")?;
        check_positive(p_max_mw, "P_max_MW", "P_max_MW must be positive")?;
        check_positive(q_max_mvar, "Q_max_MVAr", "Q_max_MVAr must be positive")?;

        if p_max_mw > s_rated_mva {
            return Err(PqError::InvalidMachineConfig {
                what: "P_max_MW must not exceed S_rated_MVA",
                value: p_max_mw,
            });
        }
        if q_max_mvar > s_rated_mva {
            return Err(PqError::InvalidMachineConfig {
                what: "Q_max_MVAr must not exceed S_rated_MVA",
                value: q_max_mvar,
            });
        }

        Ok(Self {
            s_rated_mva,
            p_max_mw,
            q_max_mvar,
        })
    }

    /// Build the replacement machine for a new apparent-power rating.
    ///
    /// `p_max` and `q_max` are capped at the new rating so a smaller machine
    /// never carries an axis limit beyond its own circle.
    pub fn with_rating(&self, s_rated_mva: Real) -> PqResult<Self> {
        check_positive(s_rated_mva, "S_rated_MVA", "S_rated_MVA must be positive")?;
        Self::new(
            s_rated_mva,
            self.p_max_mw.min(s_rated_mva),
            self.q_max_mvar.min(s_rated_mva),
        )
    }

    /// Apparent power rating (MVA), the radius of the rating circle.
    pub fn s_rated_mva(&self) -> Real {
        self.s_rated_mva
    }

    /// Active power limit (MW), full governor travel.
    pub fn p_max_mw(&self) -> Real {
        self.p_max_mw
    }

    /// Reactive power limit (MVAr), the rotor thermal bound.
    pub fn q_max_mvar(&self) -> Real {
        self.q_max_mvar
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self {
            s_rated_mva: DEFAULT_S_RATED_MVA,
            p_max_mw: DEFAULT_P_MAX_MW,
            q_max_mvar: DEFAULT_Q_MAX_MVAR,
        }
    }
}

fn check_positive(value: Real, field: &'static str, what: &'static str) -> PqResult<()> {
    if ensure_finite(value, field)? > 0.0 {
        Ok(())
    } else {
        Err(PqError::InvalidMachineConfig { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_machine_is_valid() {
        let m = Machine::default();
        let rebuilt = Machine::new(m.s_rated_mva(), m.p_max_mw(), m.q_max_mvar()).unwrap();
        assert_eq!(m, rebuilt);
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = Machine::new(0.0, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, PqError::InvalidMachineConfig { value, .. } if value == 0.0));
        assert!(Machine::new(50.0, -1.0, 10.0).is_err());
        assert!(Machine::new(50.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = Machine::new(Real::NAN, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, PqError::NonFinite { what: "S_rated_MVA", .. }));
        let err = Machine::new(50.0, 10.0, Real::INFINITY).unwrap_err();
        assert!(matches!(err, PqError::NonFinite { what: "Q_max_MVAr", .. }));
        assert!(matches!(
            Machine::default().with_rating(Real::NAN),
            Err(PqError::NonFinite { .. })
        ));
    }

    #[test]
    fn rejects_axis_limit_beyond_rating() {
        let err = Machine::new(50.0, 60.0, 10.0).unwrap_err();
        assert!(matches!(err, PqError::InvalidMachineConfig { .. }));
        assert!(Machine::new(50.0, 10.0, 51.0).is_err());
    }

    #[test]
    fn axis_limits_need_not_fit_inside_circle_together() {
        // 50² + 35² > 50², still a valid machine
        assert!(Machine::new(50.0, 50.0, 35.0).is_ok());
    }

    #[test]
    fn with_rating_caps_axis_limits() {
        let m = Machine::default().with_rating(20.0).unwrap();
        assert_eq!(m.s_rated_mva(), 20.0);
        assert_eq!(m.p_max_mw(), 20.0);
        assert_eq!(m.q_max_mvar(), 20.0);

        let bigger = Machine::default().with_rating(100.0).unwrap();
        assert_eq!(bigger.p_max_mw(), DEFAULT_P_MAX_MW);
        assert_eq!(bigger.q_max_mvar(), DEFAULT_Q_MAX_MVAR);
    }

    #[test]
    fn with_rating_rejects_zero() {
        assert!(Machine::default().with_rating(0.0).is_err());
    }
}

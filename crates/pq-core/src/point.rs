//! Operating point on the P-Q plane.

use crate::numeric::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Active/reactive power pair.
///
/// Values are replaced wholesale on every control change; nothing mutates a
/// point in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperatingPoint {
    /// Active power (MW)
    pub p_mw: Real,
    /// Reactive power (MVAr), positive = lagging
    pub q_mvar: Real,
}

impl OperatingPoint {
    pub const ORIGIN: Self = Self {
        p_mw: 0.0,
        q_mvar: 0.0,
    };

    pub fn new(p_mw: Real, q_mvar: Real) -> Self {
        Self { p_mw, q_mvar }
    }

    /// Apparent power `sqrt(P² + Q²)` (MVA).
    pub fn apparent_power(&self) -> Real {
        self.p_mw.hypot(self.q_mvar)
    }

    /// Plot coordinates in the inverted convention: `(x, y) = (Q, P)`.
    pub fn plot_xy(&self) -> (Real, Real) {
        (self.q_mvar, self.p_mw)
    }
}

impl From<(Real, Real)> for OperatingPoint {
    fn from((p_mw, q_mvar): (Real, Real)) -> Self {
        Self { p_mw, q_mvar }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apparent_power_3_4_5() {
        let op = OperatingPoint::new(40.0, 30.0);
        assert_eq!(op.apparent_power(), 50.0);
    }

    #[test]
    fn plot_axes_are_swapped() {
        let op = OperatingPoint::new(10.0, -5.0);
        assert_eq!(op.plot_xy(), (-5.0, 10.0));
    }
}

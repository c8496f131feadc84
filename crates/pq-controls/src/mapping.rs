//! Slider percentage <-> power setpoint mappings.
//!
//! - Governor: `0..100 %` -> `P in [0, P_max]`
//! - Excitation: `0..100 %` -> `Q in [-Q_max, +Q_max]`, with `50 % -> Q = 0`
//!
//! Inputs are clamped to the slider stops before mapping, and inverse results
//! are clamped back into `[0, 100]`. None of these functions enforce the
//! rating circle.

use crate::range::ControllerRange;
use pq_core::{Machine, OperatingPoint, Real};
use serde::{Deserialize, Serialize};

/// Map governor percentage to active power (MW).
pub fn governor_pct_to_p(pct: Real, machine: &Machine) -> Real {
    ControllerRange::governor(machine).scale(pct)
}

/// Inverse of [`governor_pct_to_p`].
pub fn p_to_governor_pct(p_mw: Real, machine: &Machine) -> Real {
    ControllerRange::governor(machine).percent_of(p_mw)
}

/// Map excitation percentage to reactive power (MVAr).
///
/// Convention: 0% -> -Q_max, 50% -> 0, 100% -> +Q_max.
pub fn excitation_pct_to_q(pct: Real, machine: &Machine) -> Real {
    ControllerRange::excitation(machine).scale(pct)
}

/// Inverse of [`excitation_pct_to_q`].
pub fn q_to_excitation_pct(q_mvar: Real, machine: &Machine) -> Real {
    ControllerRange::excitation(machine).percent_of(q_mvar)
}

/// A pair of slider positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPositions {
    pub governor_pct: Real,
    pub excitation_pct: Real,
}

impl Default for ControlPositions {
    /// Half governor, neutral excitation.
    fn default() -> Self {
        Self {
            governor_pct: 50.0,
            excitation_pct: 50.0,
        }
    }
}

impl ControlPositions {
    pub fn new(governor_pct: Real, excitation_pct: Real) -> Self {
        Self {
            governor_pct,
            excitation_pct,
        }
    }

    /// Raw (unclamped) candidate point for these slider positions.
    pub fn candidate(&self, machine: &Machine) -> OperatingPoint {
        OperatingPoint::new(
            governor_pct_to_p(self.governor_pct, machine),
            excitation_pct_to_q(self.excitation_pct, machine),
        )
    }

    /// Slider positions that reproduce a point, used to re-sync sliders after
    /// a preset or a clamp.
    pub fn from_point(point: OperatingPoint, machine: &Machine) -> Self {
        Self {
            governor_pct: p_to_governor_pct(point.p_mw, machine),
            excitation_pct: q_to_excitation_pct(point.q_mvar, machine),
        }
    }
}

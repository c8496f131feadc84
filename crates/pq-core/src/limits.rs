//! Limit enforcement against the machine capability region.
//!
//! Two clamps are applied, always in this order:
//! 1. **Thermal**: `|Q| > Q_max` snaps Q to `±Q_max` (rotor heating bound)
//! 2. **Rating circle**: `S > S_rated` projects the point radially onto the
//!    circle, preserving the P/Q ratio
//!
//! Both may fire for the same candidate. Both reasons are reported and the
//! rating circle, applied last, is the boundary the point ends on.

use crate::machine::Machine;
use crate::numeric::{RATING_EPS, Real, sign_or_positive};
use crate::point::OperatingPoint;
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Why a candidate point was moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ClampReason {
    /// `|Q|` exceeded the excitation (rotor thermal) limit.
    RotorThermalLimit,
    /// `S` exceeded the apparent power rating.
    MvaRatingLimit,
}

impl ClampReason {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Self::RotorThermalLimit => "ROTOR_THERMAL_LIMIT",
            Self::MvaRatingLimit => "MVA_RATING_LIMIT",
        }
    }

    /// Human-readable notice for transient display.
    pub fn notice(self) -> &'static str {
        match self {
            Self::RotorThermalLimit => "Requested Q exceeds excitation limits; clamped.",
            Self::MvaRatingLimit => "Requested point exceeds MVA rating; clamped to boundary.",
        }
    }
}

impl fmt::Display for ClampReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of [`clamp`]: the feasible point plus which limits acted on it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClampOutcome {
    pub point: OperatingPoint,
    pub thermal: bool,
    pub rating: bool,
}

impl ClampOutcome {
    pub fn was_clamped(&self) -> bool {
        self.thermal || self.rating
    }

    /// Reasons in application order (thermal first).
    pub fn reasons(&self) -> Vec<ClampReason> {
        let mut out = Vec::with_capacity(2);
        if self.thermal {
            out.push(ClampReason::RotorThermalLimit);
        }
        if self.rating {
            out.push(ClampReason::MvaRatingLimit);
        }
        out
    }

    /// The limit the point was last projected onto, if any.
    pub fn boundary(&self) -> Option<ClampReason> {
        if self.rating {
            Some(ClampReason::MvaRatingLimit)
        } else if self.thermal {
            Some(ClampReason::RotorThermalLimit)
        } else {
            None
        }
    }
}

/// Clamp a candidate point into the machine's feasible region.
///
/// Pure and total for finite input. The machine is assumed valid (checked at
/// construction), so `S_rated > 0` and the projection never divides by zero.
pub fn clamp(point: OperatingPoint, machine: &Machine) -> ClampOutcome {
    let q_max = machine.q_max_mvar();
    let s_rated = machine.s_rated_mva();

    let mut p = point.p_mw;
    let mut q = point.q_mvar;

    let thermal = q.abs() > q_max;
    if thermal {
        q = sign_or_positive(q) * q_max;
    }

    let s: Real = p.hypot(q);
    let rating = s > s_rated + RATING_EPS && s > 0.0;
    if rating {
        let scale = s_rated / s;
        p *= scale;
        q *= scale;
    }

    ClampOutcome {
        point: OperatingPoint::new(p, q),
        thermal,
        rating,
    }
}

//! Named scenario presets.
//!
//! Each preset yields a *candidate* point from the machine and the current
//! active power. The caller routes it through the limit enforcer like any
//! manual slider change.

use crate::error::ControlError;
use core::fmt;
use core::str::FromStr;
use pq_core::{Machine, OperatingPoint, Real};
use serde::{Deserialize, Serialize};

/// Power factor targeted by [`nominal_pf_085_lag`].
pub const NOMINAL_PF: Real = 0.85;

/// Smallest PF magnitude accepted by [`pf_target_q`].
const PF_FLOOR: Real = 1e-6;

/// Signed Q that gives power factor `pf` at active power `p_mw`.
///
/// Positive `pf` means lagging (Q > 0), negative means leading. The magnitude
/// is limited to `[1e-6, 1]`.
pub fn pf_target_q(p_mw: Real, pf: Real) -> Real {
    let pf_abs = pf.abs().clamp(PF_FLOOR, 1.0);
    let q_abs = p_mw.abs() * (1.0 / (pf_abs * pf_abs) - 1.0).max(0.0).sqrt();
    if pf < 0.0 { -q_abs } else { q_abs }
}

/// Full governor at 0.85 PF lagging.
pub fn nominal_pf_085_lag(machine: &Machine) -> OperatingPoint {
    let p = machine.p_max_mw();
    OperatingPoint::new(p, pf_target_q(p, NOMINAL_PF))
}

/// Keep P, push Q to the lagging thermal limit.
pub fn voltage_support(current_p_mw: Real, machine: &Machine) -> OperatingPoint {
    OperatingPoint::new(current_p_mw, machine.q_max_mvar())
}

/// Keep P, pull Q to the leading thermal limit.
pub fn capacitive_support(current_p_mw: Real, machine: &Machine) -> OperatingPoint {
    OperatingPoint::new(current_p_mw, -machine.q_max_mvar())
}

/// The preset scenarios offered to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[serde(rename = "nominal-pf085-lag")]
    NominalPf085Lag,
    VoltageSupport,
    CapacitiveSupport,
}

impl Preset {
    pub const ALL: [Preset; 3] = [
        Preset::NominalPf085Lag,
        Preset::VoltageSupport,
        Preset::CapacitiveSupport,
    ];

    /// Stable key used on the command line and in config.
    pub fn key(self) -> &'static str {
        match self {
            Self::NominalPf085Lag => "nominal-pf085-lag",
            Self::VoltageSupport => "voltage-support",
            Self::CapacitiveSupport => "capacitive-support",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NominalPf085Lag => "Nominal PF 0.85 lag",
            Self::VoltageSupport => "Voltage support (+Q)",
            Self::CapacitiveSupport => "Capacitive compensation (-Q)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::NominalPf085Lag => "Operate at power factor ~0.85 lagging for rated loading.",
            Self::VoltageSupport => {
                "Increase excitation to supply reactive power while keeping P constant."
            }
            Self::CapacitiveSupport => {
                "Reduce excitation to absorb reactive power with constant P."
            }
        }
    }

    /// Candidate point for this preset (pre-clamp).
    pub fn target(self, current_p_mw: Real, machine: &Machine) -> OperatingPoint {
        match self {
            Self::NominalPf085Lag => nominal_pf_085_lag(machine),
            Self::VoltageSupport => voltage_support(current_p_mw, machine),
            Self::CapacitiveSupport => capacitive_support(current_p_mw, machine),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ControlError::UnknownPreset {
                name: s.to_string(),
                expected: Self::ALL.map(Preset::key).join(", "),
            })
    }
}

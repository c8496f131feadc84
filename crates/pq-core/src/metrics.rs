//! Derived readouts: apparent power, power factor, angle, stator current.
//!
//! Everything here is recomputed from `(OperatingPoint, Machine)` on every
//! call. Nothing is cached.

use crate::machine::Machine;
use crate::numeric::Real;
use crate::point::OperatingPoint;
use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Display text for an undefined quantity.
pub const UNDEFINED_TEXT: &str = "—";

/// Direction of reactive power flow, reported alongside the PF magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ReactiveFlow {
    /// Q > 0, inductive
    Lagging,
    /// Q < 0, capacitive
    Leading,
    /// Q == 0
    Unity,
}

impl ReactiveFlow {
    pub fn from_q(q_mvar: Real) -> Self {
        if q_mvar > 0.0 {
            Self::Lagging
        } else if q_mvar < 0.0 {
            Self::Leading
        } else {
            Self::Unity
        }
    }
}

impl fmt::Display for ReactiveFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lagging => "LAGGING",
            Self::Leading => "LEADING",
            Self::Unity => "UNITY",
        })
    }
}

/// Power factor magnitude, or the undefined sentinel when `S == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PowerFactor {
    Undefined,
    Value(Real),
}

impl PowerFactor {
    pub fn value(self) -> Option<Real> {
        match self {
            Self::Undefined => None,
            Self::Value(v) => Some(v),
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for PowerFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str(UNDEFINED_TEXT),
            Self::Value(v) => write!(f, "{v:.3}"),
        }
    }
}

/// Read-only view over `(OperatingPoint, Machine)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Readout {
    /// Apparent power (MVA)
    pub s_mva: Real,
    pub power_factor: PowerFactor,
    pub flow: ReactiveFlow,
    /// `degrees(atan2(Q, P))`; `None` at the origin
    pub phi_deg: Option<Real>,
    /// `S / S_rated`
    pub stator_current_pu: Real,
}

/// Compute the readout for a point.
///
/// The angle keeps this model's inverted axis convention: it is measured from
/// the P axis toward the Q axis, `atan2(Q, P)`. Do not swap the arguments.
pub fn derive(point: OperatingPoint, machine: &Machine) -> Readout {
    let OperatingPoint { p_mw, q_mvar } = point;
    let s_mva = point.apparent_power();

    let (power_factor, phi_deg) = if s_mva == 0.0 {
        (PowerFactor::Undefined, None)
    } else {
        (
            PowerFactor::Value((p_mw / s_mva).abs()),
            Some(q_mvar.atan2(p_mw).to_degrees()),
        )
    };

    Readout {
        s_mva,
        power_factor,
        flow: ReactiveFlow::from_q(q_mvar),
        phi_deg,
        // S_rated > 0 by construction
        stator_current_pu: s_mva / machine.s_rated_mva(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> Machine {
        Machine::new(50.0, 50.0, 35.0).unwrap()
    }

    #[test]
    fn lagging_known_values() {
        let r = derive(OperatingPoint::new(40.0, 30.0), &machine());
        assert_eq!(r.s_mva, 50.0);
        assert!((r.power_factor.value().unwrap() - 0.8).abs() < 1e-12);
        assert_eq!(r.flow, ReactiveFlow::Lagging);
        assert!((r.phi_deg.unwrap() - 36.869_897_645_844).abs() < 1e-6);
        assert!((r.stator_current_pu - 1.0).abs() < 1e-12);
    }

    #[test]
    fn leading_known_values() {
        let r = derive(OperatingPoint::new(40.0, -30.0), &machine());
        assert!((r.power_factor.value().unwrap() - 0.8).abs() < 1e-12);
        assert_eq!(r.flow, ReactiveFlow::Leading);
        assert!((r.phi_deg.unwrap() + 36.869_897_645_844).abs() < 1e-6);
    }

    #[test]
    fn origin_is_undefined() {
        let r = derive(OperatingPoint::ORIGIN, &machine());
        assert_eq!(r.s_mva, 0.0);
        assert!(r.power_factor.is_undefined());
        assert!(r.phi_deg.is_none());
        assert_eq!(r.flow, ReactiveFlow::Unity);
        assert_eq!(r.stator_current_pu, 0.0);
        assert_eq!(r.power_factor.to_string(), "—");
    }

    #[test]
    fn pure_active_power_is_unity() {
        let r = derive(OperatingPoint::new(25.0, 0.0), &machine());
        assert_eq!(r.flow, ReactiveFlow::Unity);
        assert_eq!(r.power_factor, PowerFactor::Value(1.0));
        assert_eq!(r.phi_deg, Some(0.0));
        assert!((r.stator_current_pu - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pure_reactive_power_has_zero_pf() {
        let r = derive(OperatingPoint::new(0.0, 20.0), &machine());
        assert_eq!(r.power_factor, PowerFactor::Value(0.0));
        assert!((r.phi_deg.unwrap() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn flow_display() {
        assert_eq!(ReactiveFlow::Lagging.to_string(), "LAGGING");
        assert_eq!(ReactiveFlow::Leading.to_string(), "LEADING");
        assert_eq!(ReactiveFlow::Unity.to_string(), "UNITY");
        assert_eq!(PowerFactor::Value(0.85).to_string(), "0.850");
    }
}

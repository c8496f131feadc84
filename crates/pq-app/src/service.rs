//! One recompute cycle per interaction: map -> clamp -> derive.

use pq_controls::{ControlPositions, Preset};
use pq_core::{ClampOutcome, ClampReason, Machine, OperatingPoint, Readout, Real, clamp, derive};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Everything a front end needs after one interaction.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    /// Candidate before limits were applied.
    pub candidate: OperatingPoint,
    /// Feasible point to display.
    pub point: OperatingPoint,
    pub readout: Readout,
    pub clamp: ClampOutcome,
    /// Slider positions matching `point`.
    pub positions: ControlPositions,
}

impl UpdateResponse {
    /// The boundary the point was last projected onto, if any.
    pub fn reason(&self) -> Option<ClampReason> {
        self.clamp.boundary()
    }

    /// Every limit that acted, in application order.
    pub fn reasons(&self) -> Vec<ClampReason> {
        self.clamp.reasons()
    }

    /// Transient notices to show the operator.
    pub fn notices(&self) -> Vec<&'static str> {
        self.reasons().into_iter().map(ClampReason::notice).collect()
    }
}

/// Route a candidate through the limit enforcer and derive its readout.
pub fn evaluate(candidate: OperatingPoint, machine: &Machine) -> UpdateResponse {
    let outcome = clamp(candidate, machine);
    let point = outcome.point;
    let readout = derive(point, machine);

    if outcome.was_clamped() {
        info!(
            p_mw = candidate.p_mw,
            q_mvar = candidate.q_mvar,
            reasons = ?outcome.reasons(),
            "candidate clamped"
        );
    }
    debug!(
        p_mw = point.p_mw,
        q_mvar = point.q_mvar,
        s_mva = readout.s_mva,
        "operating point updated"
    );

    UpdateResponse {
        candidate,
        point,
        readout,
        clamp: outcome,
        positions: ControlPositions::from_point(point, machine),
    }
}

/// Slider entry point: governor % and excitation % to a displayed point.
///
/// Out-of-range percentages are clamped to the slider stops.
pub fn update(governor_pct: Real, excitation_pct: Real, machine: &Machine) -> UpdateResponse {
    let positions = ControlPositions::new(governor_pct, excitation_pct);
    evaluate(positions.candidate(machine), machine)
}

/// Preset entry point. `current_p_mw` is the active power on display.
pub fn apply_preset(preset: Preset, current_p_mw: Real, machine: &Machine) -> UpdateResponse {
    info!(preset = preset.key(), current_p_mw, "applying preset");
    evaluate(preset.target(current_p_mw, machine), machine)
}

pub fn nominal_pf_085_lag(machine: &Machine) -> UpdateResponse {
    apply_preset(Preset::NominalPf085Lag, machine.p_max_mw(), machine)
}

pub fn voltage_support(current_p_mw: Real, machine: &Machine) -> UpdateResponse {
    apply_preset(Preset::VoltageSupport, current_p_mw, machine)
}

pub fn capacitive_support(current_p_mw: Real, machine: &Machine) -> UpdateResponse {
    apply_preset(Preset::CapacitiveSupport, current_p_mw, machine)
}

/// Replacement machine for a rating slider change.
pub fn change_rating(machine: &Machine, s_rated_mva: Real) -> AppResult<Machine> {
    if !s_rated_mva.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "rating must be finite, got {s_rated_mva}"
        )));
    }
    let next = machine.with_rating(s_rated_mva)?;
    debug!(
        s_rated_mva = next.s_rated_mva(),
        p_max_mw = next.p_max_mw(),
        q_max_mvar = next.q_max_mvar(),
        "machine rating changed"
    );
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pq_core::ReactiveFlow;

    fn machine() -> Machine {
        Machine::new(50.0, 50.0, 35.0).unwrap()
    }

    #[test]
    fn neutral_sliders() {
        let r = update(50.0, 50.0, &machine());
        assert_eq!(r.point, OperatingPoint::new(25.0, 0.0));
        assert!(r.reason().is_none());
        assert_eq!(r.readout.flow, ReactiveFlow::Unity);
        assert!(r.notices().is_empty());
    }

    #[test]
    fn full_sliders_hit_rating_circle() {
        // (50, 35) lies outside the 50 MVA circle
        let r = update(100.0, 100.0, &machine());
        assert_eq!(r.reason(), Some(ClampReason::MvaRatingLimit));
        assert_eq!(r.reasons(), vec![ClampReason::MvaRatingLimit]);
        assert!((r.point.apparent_power() - 50.0).abs() < 1e-6);
        assert_eq!(r.notices().len(), 1);
    }

    #[test]
    fn positions_follow_clamped_point() {
        let r = update(100.0, 100.0, &machine());
        assert!(r.positions.governor_pct < 100.0);
        assert!(r.positions.excitation_pct < 100.0);
        let replay = update(r.positions.governor_pct, r.positions.excitation_pct, &machine());
        assert!(!replay.clamp.was_clamped());
        assert!((replay.point.p_mw - r.point.p_mw).abs() < 1e-9);
        assert!((replay.point.q_mvar - r.point.q_mvar).abs() < 1e-9);
    }

    #[test]
    fn preset_entry_points() {
        let m = machine();
        let nominal = nominal_pf_085_lag(&m);
        assert!((nominal.readout.power_factor.value().unwrap() - 0.85).abs() < 1e-9);
        assert_eq!(nominal.readout.flow, ReactiveFlow::Lagging);

        let support = voltage_support(10.0, &m);
        assert_eq!(support.point, OperatingPoint::new(10.0, 35.0));
        assert!(support.reason().is_none());

        let cap = capacitive_support(10.0, &m);
        assert_eq!(cap.point, OperatingPoint::new(10.0, -35.0));
        assert_eq!(cap.readout.flow, ReactiveFlow::Leading);
    }

    #[test]
    fn rating_change_rebuilds_machine() {
        let m = change_rating(&machine(), 30.0).unwrap();
        assert_eq!(m.p_max_mw(), 30.0);
        assert!(change_rating(&machine(), -1.0).is_err());
        assert!(change_rating(&machine(), f64::NAN).is_err());
    }
}

//! Plot geometry as plain data.
//!
//! Nothing here draws. A front end receives the rating arc, the PF reference
//! rays and the operating ray in plot coordinates and renders them with
//! whatever it likes. Plot coordinates follow the model's axis convention:
//! `x = Q`, `y = P`.

use pq_config::AxisLabels;
use pq_core::{Machine, OperatingPoint, Real};
use serde::Serialize;

/// PF rays drawn by default: 0.8 lagging, 0.8 leading, unity.
pub const DEFAULT_PF_ANNOTATIONS: [Real; 3] = [0.8, -0.8, 1.0];

/// PF magnitudes are drawn no closer to unity than this, so every ray has
/// a visible Q component and a label offset.
const PF_RAY_LIMIT: Real = 0.999;

/// Rating arc resolution.
const ARC_STEP_DEG: usize = 1;

/// A point in plot space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotXy {
    pub x: Real,
    pub y: Real,
}

impl From<OperatingPoint> for PlotXy {
    fn from(op: OperatingPoint) -> Self {
        let (x, y) = op.plot_xy();
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    pub x_min: Real,
    pub x_max: Real,
    pub y_min: Real,
    pub y_max: Real,
}

/// Reference ray from the origin to the rating circle at a given PF.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PfRay {
    pub pf: Real,
    pub end: PlotXy,
    /// Label anchor, slightly inside the circle.
    pub label_at: PlotXy,
    pub label: String,
}

/// Horizontal band of the plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub label: &'static str,
    pub x_from: Real,
    pub x_to: Real,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotGeometry {
    pub bounds: AxisBounds,
    pub x_label: String,
    pub y_label: String,
    pub rating_arc: Vec<PlotXy>,
    pub pf_rays: Vec<PfRay>,
    pub lagging: Region,
    pub leading: Region,
    /// Origin to the operating point.
    pub operating_ray: [PlotXy; 2],
}

/// Upper half of the rating circle, one point per degree from `+Q` to `-Q`.
pub fn rating_arc(s_rated_mva: Real) -> Vec<PlotXy> {
    (0..=180)
        .step_by(ARC_STEP_DEG)
        .map(|deg| {
            let theta = (deg as Real).to_radians();
            PlotXy {
                x: s_rated_mva * theta.cos(),
                y: s_rated_mva * theta.sin(),
            }
        })
        .collect()
}

/// Ray for power factor `pf`; negative values are leading.
pub fn pf_ray(s_rated_mva: Real, pf: Real) -> PfRay {
    let pf_clamped = pf.clamp(-PF_RAY_LIMIT, PF_RAY_LIMIT);
    let angle = pf_clamped.abs().acos();
    let sign = if pf_clamped >= 0.0 { 1.0 } else { -1.0 };
    let end = PlotXy {
        x: s_rated_mva * angle.sin() * sign,
        y: s_rated_mva * pf_clamped.abs(),
    };
    PfRay {
        pf,
        end,
        label_at: PlotXy {
            x: end.x * 0.92,
            y: end.y * 0.92,
        },
        label: format!("PF {pf:+.2}"),
    }
}

/// Geometry for one render of the P-Q plane.
pub fn plot_geometry(
    machine: &Machine,
    labels: &AxisLabels,
    point: OperatingPoint,
    pf_annotations: &[Real],
) -> PlotGeometry {
    let s = machine.s_rated_mva();
    PlotGeometry {
        bounds: AxisBounds {
            x_min: -s,
            x_max: s,
            y_min: 0.0,
            y_max: s,
        },
        x_label: labels.x.clone(),
        y_label: labels.y.clone(),
        rating_arc: rating_arc(s),
        pf_rays: pf_annotations.iter().map(|&pf| pf_ray(s, pf)).collect(),
        lagging: Region {
            label: "Lagging (+Q)",
            x_from: 0.0,
            x_to: s,
        },
        leading: Region {
            label: "Leading (-Q)",
            x_from: -s,
            x_to: 0.0,
        },
        operating_ray: [PlotXy::from(OperatingPoint::ORIGIN), PlotXy::from(point)],
    }
}

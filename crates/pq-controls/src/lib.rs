//! Operator controls for the P-Q teaching model.
//!
//! This crate turns slider positions and named scenarios into candidate
//! operating points. It deliberately knows nothing about the rating circle:
//! every candidate produced here still goes through [`pq_core::clamp`] before
//! it becomes the displayed point.
//!
//! # Architecture
//!
//! - [`range`]: slider travel ranges derived from the machine limits
//! - [`mapping`]: governor % -> P and excitation % -> Q, plus inverses
//! - [`presets`]: named target points (rated PF, voltage support, capacitive support)
//!
//! # Design Principles
//!
//! - **Slider semantics only**: physical feasibility lives in `pq-core`
//! - **Total functions**: out-of-range percentages clamp to the slider stops

pub mod error;
pub mod mapping;
pub mod presets;
pub mod range;

pub use error::ControlError;
pub use mapping::{
    ControlPositions, excitation_pct_to_q, governor_pct_to_p, p_to_governor_pct,
    q_to_excitation_pct,
};
pub use presets::{
    Preset, capacitive_support, nominal_pf_085_lag, pf_target_q, voltage_support,
};
pub use range::{ControllerRange, clamp_percent};

//! Shared application service layer for the P-Q teaching model.
//!
//! Front ends call [`update`] once per slider interaction and
//! [`apply_preset`] for scenario buttons. Both run the full
//! map -> clamp -> derive cycle and return the same response shape. Plot
//! geometry and readout text are provided as plain data for whatever
//! renders them.

pub mod error;
pub mod plot;
pub mod readout;
pub mod service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use plot::{DEFAULT_PF_ANNOTATIONS, PfRay, PlotGeometry, PlotXy, plot_geometry};
pub use readout::{ReadoutRow, readout_rows, render_table, tooltip_lines};
pub use service::{
    UpdateResponse, apply_preset, capacitive_support, change_rating, evaluate,
    nominal_pf_085_lag, update, voltage_support,
};

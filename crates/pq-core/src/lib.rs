//! pq-core: geometry and limits engine for the P-Q teaching model.
//!
//! Contains:
//! - machine (rating constants, validated at construction)
//! - point (operating point on the P-Q plane)
//! - limits (thermal and rating-circle clamp)
//! - metrics (S, PF, phi, stator current readouts)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)
//!
//! Axis convention: the plane is drawn with Q on the x axis and P on the y
//! axis, and the angle is `atan2(Q, P)`. This is intentional and preserved.

pub mod error;
pub mod limits;
pub mod machine;
pub mod metrics;
pub mod numeric;
pub mod point;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PqError, PqResult};
pub use limits::{ClampOutcome, ClampReason, clamp};
pub use machine::Machine;
pub use metrics::{PowerFactor, Readout, ReactiveFlow, derive};
pub use numeric::*;
pub use point::OperatingPoint;

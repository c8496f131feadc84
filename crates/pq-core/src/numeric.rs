use crate::error::{PqError, PqResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Tolerance on the clamped result: `P² + Q² <= S_rated²` and `|Q| <= Q_max`.
pub const LIMIT_TOL: Real = 1e-6;

/// Apparent power (MVA) a point may sit beyond the rating circle without
/// being flagged as clamped.
pub const RATING_EPS: Real = 1e-9;

/// Reject NaN and infinities before any comparison is made.
pub fn ensure_finite(v: Real, what: &'static str) -> PqResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PqError::NonFinite { what, value: v })
    }
}

/// Sign with zero treated as positive.
#[inline]
pub fn sign_or_positive(v: Real) -> Real {
    if v < 0.0 { -1.0 } else { 1.0 }
}

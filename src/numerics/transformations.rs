//! Bounded-transform utilities.
//!
//! Provides the scaled-logistic pair referenced by the per-parameter
//! transform flags: parameters flagged for transformed-space sampling move
//! through an unconstrained real line and are mapped back into their
//! `[lower, upper]` interval before use. The functions here follow guarded
//! strategies with explicit cutoffs and an epsilon clamp against the
//! interval edges, keeping `f64` arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`LOGIT_EPS`]: clamp keeping probabilities away from 0 and 1 before
//!   taking logs.
//! - [`scaled_sigmoid(y, lower, upper)`]: ℝ → (lower, upper).
//! - [`scaled_logit(x, lower, upper)`]: (lower, upper) → ℝ, inverse of the
//!   above up to the epsilon clamp.
//!
//! # Rationale
//! The registry itself never transforms values; these helpers exist so the
//! sampler consuming `params_trans` shares one definition of the mapping
//! with the data contract instead of re-deriving it.

/// Clamp applied to normalized positions before log-odds are taken.
///
/// Positions within `LOGIT_EPS` of an interval edge would produce log terms
/// of extreme magnitude (or ±inf exactly at the edge); clamping keeps the
/// forward and inverse maps finite for every in-interval input.
pub const LOGIT_EPS: f64 = 1e-10;

/// Map an unconstrained value into the open interval `(lower, upper)`.
///
/// Computes `lower + (upper - lower) · σ(y)` with a guarded logistic:
/// for `|y| > 35` the exponential under- or overflows past `f64` epsilon,
/// so σ is snapped to the clamped edge value directly.
///
/// # Parameters
/// - `y`: unconstrained (transformed-space) value.
/// - `lower`, `upper`: interval edges, `lower < upper`, both finite.
///
/// # Returns
/// - The back-transformed value, strictly inside `(lower, upper)`.
pub fn scaled_sigmoid(y: f64, lower: f64, upper: f64) -> f64 {
    let p = if y > 35.0 {
        1.0 - LOGIT_EPS
    } else if y < -35.0 {
        LOGIT_EPS
    } else {
        (1.0 / (1.0 + (-y).exp())).clamp(LOGIT_EPS, 1.0 - LOGIT_EPS)
    };
    lower + (upper - lower) * p
}

/// Map a bounded value from `[lower, upper]` onto the real line; inverse of
/// [`scaled_sigmoid`] up to the epsilon clamp.
///
/// The normalized position `(x - lower) / (upper - lower)` is clamped to
/// `[LOGIT_EPS, 1 - LOGIT_EPS]` before the log-odds are taken, so inputs on
/// (or marginally outside) the interval edges map to large finite values
/// instead of ±inf.
///
/// # Parameters
/// - `x`: bounded (untransformed-space) value, normally in `[lower, upper]`.
/// - `lower`, `upper`: interval edges, `lower < upper`, both finite.
///
/// # Returns
/// - The log-odds of the clamped normalized position.
pub fn scaled_logit(x: f64, lower: f64, upper: f64) -> f64 {
    let p = ((x - lower) / (upper - lower)).clamp(LOGIT_EPS, 1.0 - LOGIT_EPS);
    (p / (1.0 - p)).ln()
}

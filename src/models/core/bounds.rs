//! Parameter bounds — per-parameter admissible intervals in untransformed space.
//!
//! Purpose
//! -------
//! Provide the container for the closed intervals `[lower[i], upper[i]]` that
//! every model parameter must live in while expressed in its *untransformed*
//! (bounded) space. Parameters flagged for transformed-space sampling are
//! mapped back into these intervals via the scaled-logistic transform in
//! [`crate::numerics::transformations`] before use.
//!
//! Conventions
//! -----------
//! - `lower` and `upper` are positionally aligned with the owning
//!   specification's `params` sequence; index `i` describes parameter `i`.
//! - This type is a plain carrier. Length agreement, finiteness, and strict
//!   ordering (`lower[i] < upper[i]`) are enforced by
//!   [`crate::models::core::validation`] when a specification is registered,
//!   so that an invalid table is reported as a typed registration failure
//!   rather than rejected piecemeal at construction sites.
use ndarray::Array1;

/// Lower/upper bound pair for all parameters of one model specification.
///
/// Fields are public and positionally aligned with the owning
/// specification's `params`. Use [`ParamBounds::get`] for a per-parameter
/// view and [`ParamBounds::len`] for the parameter count implied by the
/// bounds arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamBounds {
    /// Lower interval edges, one per parameter.
    pub lower: Array1<f64>,
    /// Upper interval edges, one per parameter.
    pub upper: Array1<f64>,
}

impl ParamBounds {
    /// Wrap a pair of bound arrays without further checks.
    ///
    /// Invariants (equal lengths, finite entries, `lower[i] < upper[i]`) are
    /// checked by the validation pass at registration time.
    pub fn new(lower: Array1<f64>, upper: Array1<f64>) -> Self {
        ParamBounds { lower, upper }
    }

    /// Build bounds from plain slices, copying into owned arrays.
    pub fn from_slices(lower: &[f64], upper: &[f64]) -> Self {
        ParamBounds { lower: Array1::from(lower.to_vec()), upper: Array1::from(upper.to_vec()) }
    }

    /// Number of parameters covered by the `lower` array.
    ///
    /// `upper` may disagree on an unvalidated instance; the validation pass
    /// reports that as a length mismatch on the `param_bounds.upper` field.
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// True when no parameter intervals are stored.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// The `(lower, upper)` interval for parameter `index`, or `None` when
    /// the index is out of range for either array.
    pub fn get(&self, index: usize) -> Option<(f64, f64)> {
        match (self.lower.get(index), self.upper.get(index)) {
            (Some(&lo), Some(&hi)) => Some((lo, hi)),
            _ => None,
        }
    }

    /// True when `value` lies within the closed interval of parameter
    /// `index`. Out-of-range indices are reported as not contained.
    pub fn contains(&self, index: usize, value: f64) -> bool {
        match self.get(index) {
            Some((lo, hi)) => value >= lo && value <= hi,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction from slices and per-index access.
    // - Containment checks, including closed-interval edge values.
    //
    // They intentionally DO NOT cover:
    // - Rejection of inverted or non-finite bounds; that lives in the
    //   validation pass (see `models::core::validation` tests).
    // -------------------------------------------------------------------------

    #[test]
    fn from_slices_preserves_values_and_length() {
        let bounds = ParamBounds::from_slices(&[-3.0, 0.3], &[3.0, 2.5]);

        assert_eq!(bounds.len(), 2);
        assert_eq!(bounds.get(0), Some((-3.0, 3.0)));
        assert_eq!(bounds.get(1), Some((0.3, 2.5)));
        assert_eq!(bounds.get(2), None);
    }

    #[test]
    fn contains_is_inclusive_at_both_edges() {
        let bounds = ParamBounds::from_slices(&[0.1], &[0.9]);

        assert!(bounds.contains(0, 0.1));
        assert!(bounds.contains(0, 0.9));
        assert!(bounds.contains(0, 0.5));
        assert!(!bounds.contains(0, 0.0999));
        assert!(!bounds.contains(0, 0.9001));
        assert!(!bounds.contains(1, 0.5));
    }
}

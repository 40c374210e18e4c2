//! Conversion helpers for the PyO3 binding surface.
//!
//! Purpose
//! -------
//! Keep the Rust → Python data-marshalling code for the `python-bindings`
//! feature in one place: NumPy hand-off for the per-parameter arrays,
//! 0/1 integer rendering of the transform flags (the convention the
//! Python-side consumers expect), and dict assembly for the slice-width
//! table. The binding classes in the crate root stay thin by delegating
//! here.
//!
//! Conventions
//! -----------
//! - Everything in this module is gated on `python-bindings` and performs
//!   at most one allocation per converted field.
//! - No function here validates; only already-validated registry records
//!   pass through.
#[cfg(feature = "python-bindings")]
use crate::models::core::bounds::ParamBounds;

#[cfg(feature = "python-bindings")]
use crate::models::core::widths::SliceWidths;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use std::collections::BTreeMap;

/// Convert a bounds pair into two owned NumPy arrays `(lower, upper)`.
#[cfg(feature = "python-bindings")]
pub fn bounds_to_py<'py>(
    py: Python<'py>, bounds: &ParamBounds,
) -> (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>) {
    (bounds.lower.clone().into_pyarray(py), bounds.upper.clone().into_pyarray(py))
}

/// Render transform flags in the 0/1 integer convention of the Python API.
#[cfg(feature = "python-bindings")]
pub fn trans_flags_to_ints(flags: &[bool]) -> Vec<u8> {
    flags.iter().map(|&flag| u8::from(flag)).collect()
}

/// Assemble the slice-width table as an owned key → width map, which PyO3
/// renders as a `dict` with deterministic key order.
#[cfg(feature = "python-bindings")]
pub fn widths_to_map(widths: &SliceWidths) -> BTreeMap<String, f64> {
    widths.iter().map(|(key, width)| (key.to_string(), width)).collect()
}

#[cfg(all(test, feature = "python-bindings"))]
mod tests {
    use super::*;

    #[test]
    fn trans_flags_render_as_zero_one() {
        assert_eq!(trans_flags_to_ints(&[false, true, false]), vec![0, 1, 0]);
    }

    #[test]
    fn widths_map_preserves_entries() {
        let widths = SliceWidths::from_pairs(&[("v", 1.5), ("z_trans", 0.2)]);
        let map = widths_to_map(&widths);
        assert_eq!(map.get("v"), Some(&1.5));
        assert_eq!(map.get("z_trans"), Some(&0.2));
        assert_eq!(map.len(), 2);
    }
}

//! rust_ssms — model-specification registry for sequential-sampling models.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the model-specification registry to Python via the `_rust_ssms`
//! extension module. The registry is the single source of truth for the
//! parameter spaces of a family of sequential-sampling decision models
//! (drift-diffusion, race, and leaky-competing-accumulator variants) used in
//! Bayesian cognitive modeling.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules ([`models`] and [`numerics`]) as the
//!   public crate surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for
//!   the `_rust_ssms` Python extension when the `python-bindings` feature is
//!   enabled.
//! - Expose read-only access to every registered specification: parameter
//!   names, bounds, defaults, transform flags, hierarchical inclusion,
//!   response choices, boundary handle, and slice-sampler step sizes.
//!
//! Invariants & assumptions
//! ------------------------
//! - All consistency enforcement lives in the inner Rust modules; this file
//!   performs only FFI glue and error mapping.
//! - Every specification reachable through the bindings has passed the full
//!   registration-time invariant pass; Python-side consumers never observe
//!   a partially-validated record.
//!
//! Conventions
//! -----------
//! - Python-exposed values follow the conventions of the established
//!   Python tooling for these models: transform flags are 0/1 integers,
//!   bounds and defaults arrive as NumPy arrays, and slice widths as a
//!   plain dict.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted at the PyO3 boundary: unknown identifiers
//!   raise `KeyError`, invalid specifications raise `ValueError`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`models::prelude`] and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_ssms` module defined
//!   here; `get_model` and `list_models` are the intended entry points.

pub mod models;
pub mod numerics;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use std::collections::BTreeMap;

#[cfg(feature = "python-bindings")]
use std::sync::Arc;

#[cfg(feature = "python-bindings")]
use crate::{
    models::{core::spec::ModelSpec, registry::model_registry},
    utils::{bounds_to_py, trans_flags_to_ints, widths_to_map},
};

/// ModelConfig — Python-facing view of one model specification.
///
/// Purpose
/// -------
/// Expose a validated [`ModelSpec`] to Python callers while preserving the
/// core Rust invariants: the wrapper shares the registry's immutable
/// instance and offers read-only property access.
///
/// Key behaviors
/// -------------
/// - Hand out the per-parameter arrays (bounds, defaults) as NumPy arrays
///   and scalar metadata (names, flags, choices) as plain Python objects.
/// - Render transform flags in the 0/1 integer convention of the
///   surrounding Python tooling.
///
/// Fields
/// ------
/// - `inner`: `Arc<ModelSpec>`
///   Shared, validated registry record; cloning the wrapper never copies
///   the specification.
///
/// Notes
/// -----
/// - This type is intended for Python consumption; native Rust code should
///   use [`models::registry::Registry::get`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_ssms")]
pub struct ModelConfig {
    /// The shared specification record.
    inner: Arc<ModelSpec>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ModelConfig {
    /// The model identifier this record was fetched under.
    #[getter]
    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// Human-readable model description.
    #[getter]
    pub fn doc(&self) -> String {
        self.inner.doc.clone()
    }

    /// Ordered parameter names.
    #[getter]
    pub fn params(&self) -> Vec<String> {
        self.inner.params.clone()
    }

    /// Transform flags as 0/1 integers, aligned with `params`.
    #[getter]
    pub fn params_trans(&self) -> Vec<u8> {
        trans_flags_to_ints(&self.inner.params_trans)
    }

    /// Between-subject std upper bounds; `None` marks an unbounded entry.
    #[getter]
    pub fn params_std_upper(&self) -> Vec<Option<f64>> {
        self.inner.params_std_upper.clone()
    }

    /// `(lower, upper)` bound arrays in untransformed space.
    #[getter]
    pub fn param_bounds<'py>(
        &self, py: Python<'py>,
    ) -> (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>) {
        bounds_to_py(py, &self.inner.param_bounds)
    }

    /// Default parameter values.
    #[getter]
    pub fn params_default<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.params_default.clone().into_pyarray(py)
    }

    /// Name of the decision-boundary shape handle.
    #[getter]
    pub fn boundary(&self) -> &'static str {
        self.inner.boundary.name()
    }

    /// Whether the boundary combines multiplicatively with the separation.
    #[getter]
    pub fn boundary_multiplicative(&self) -> bool {
        self.inner.boundary_multiplicative
    }

    /// Name of the drift shape handle, when one is set.
    #[getter]
    pub fn drift(&self) -> Option<&'static str> {
        self.inner.drift.map(|drift| drift.name())
    }

    /// Parameters that vary by subject under the hierarchical layer.
    #[getter]
    pub fn hddm_include(&self) -> Vec<String> {
        self.inner.hddm_include.clone()
    }

    /// Admissible discrete response labels.
    #[getter]
    pub fn choices(&self) -> Vec<i64> {
        self.inner.choices.clone()
    }

    /// Slice-sampler step sizes as a key → width dict.
    #[getter]
    pub fn slice_widths(&self) -> BTreeMap<String, f64> {
        widths_to_map(&self.inner.slice_widths)
    }

    /// Step size for sampling `name`, honoring its transform flag.
    pub fn sampling_width(&self, name: &str) -> Option<f64> {
        self.inner.slice_widths.sampling_width(name, self.inner.is_transformed(name))
    }

    fn __repr__(&self) -> String {
        format!(
            "ModelConfig(name='{}', params={:?}, choices={:?})",
            self.inner.name, self.inner.params, self.inner.choices
        )
    }
}

/// Fetch the specification registered under `name` from the builtin
/// registry.
///
/// Raises `KeyError` (listing the registered identifiers) for unknown
/// names.
#[cfg(feature = "python-bindings")]
#[pyfunction]
pub fn get_model(name: &str) -> PyResult<ModelConfig> {
    let inner = model_registry().get(name)?;
    Ok(ModelConfig { inner })
}

/// All registered model identifiers, alias and primary alike, in
/// registration order.
#[cfg(feature = "python-bindings")]
#[pyfunction]
pub fn list_models() -> Vec<String> {
    model_registry().list_identifiers()
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_ssms(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ModelConfig>()?;
    m.add_function(wrap_pyfunction!(get_model, m)?)?;
    m.add_function(wrap_pyfunction!(list_models, m)?)?;
    Ok(())
}

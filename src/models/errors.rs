//! Errors for the model-specification registry (structural invariants,
//! registration conflicts, and lookup failures).
//!
//! This module defines a specification error type, [`SpecError`], and a
//! registry error type, [`RegistryError`], used across the Python-facing API
//! and the internal Rust core. Both implement `Display`/`Error` and convert
//! to `PyErr` when the `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to positions in the `params` sequence.
//! - Every validation failure names the offending field and, where it exists,
//!   the offending parameter index/name, slice-width key, or choice value.
//! - All failures are detected eagerly at registration time; no error in this
//!   module is produced lazily on first use of a specification.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::{PyKeyError, PyValueError};
#[cfg(feature = "python-bindings")]
use pyo3::PyErr;

/// Result alias for specification-validation paths that may produce
/// [`SpecError`].
pub type SpecResult<T> = Result<T, SpecError>;

/// Result alias for registry operations that may produce [`RegistryError`].
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Structural errors for a single model specification.
///
/// Covers the per-specification invariants: array-length agreement, bound
/// ordering, defaults within bounds, unique parameter names, hierarchical
/// inclusion, response choices, slice-width resolvability, and boundary
/// presence. Each variant carries enough payload to identify the offending
/// field without re-running validation.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecError {
    // ---- Length / structure ----
    /// `params` is empty; a specification needs at least one parameter.
    EmptyParams,

    /// A per-parameter sequence disagrees with `params` in length.
    LengthMismatch { field: &'static str, expected: usize, actual: usize },

    /// A parameter name occurs more than once in `params`.
    DuplicateParam { index: usize, name: String },

    // ---- Bounds and defaults ----
    /// A bound coordinate is NaN or ±inf.
    NonFiniteBound { index: usize, name: String, value: f64 },

    /// `lower[i] >= upper[i]` for some parameter.
    InvertedBounds { index: usize, name: String, lower: f64, upper: f64 },

    /// A default value is NaN or ±inf.
    NonFiniteDefault { index: usize, name: String, value: f64 },

    /// A default value lies outside its `[lower, upper]` interval.
    DefaultOutOfBounds { index: usize, name: String, value: f64, lower: f64, upper: f64 },

    /// A finite between-subject standard-deviation bound is not > 0.
    InvalidStdUpper { index: usize, name: String, value: f64 },

    // ---- Hierarchical inclusion ----
    /// `hddm_include` names a parameter that does not exist in `params`.
    UnknownHierarchicalParam { name: String },

    /// `hddm_include` lists the same parameter twice.
    DuplicateHierarchicalParam { name: String },

    // ---- Response choices ----
    /// Fewer than two discrete response choices.
    TooFewChoices { count: usize },

    /// A response label occurs more than once in `choices`.
    DuplicateChoice { value: i64 },

    // ---- Slice widths ----
    /// A required step-size key has no entry in `slice_widths`.
    MissingSliceWidth { param: String, key: String },

    /// A stored step size is NaN, ±inf, or not strictly positive.
    InvalidSliceWidth { key: String, value: f64 },

    // ---- Boundary handle ----
    /// No decision-boundary handle was supplied to the builder.
    MissingBoundary,
}

impl std::error::Error for SpecError {}

impl std::fmt::Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Length / structure ----
            SpecError::EmptyParams => {
                write!(f, "Specification must declare at least one parameter.")
            }
            SpecError::LengthMismatch { field, expected, actual } => {
                write!(f, "Field '{field}' length mismatch: expected {expected}, got {actual}")
            }
            SpecError::DuplicateParam { index, name } => {
                write!(f, "Parameter name '{name}' at index {index} is a duplicate")
            }
            // ---- Bounds and defaults ----
            SpecError::NonFiniteBound { index, name, value } => {
                write!(f, "Bound for parameter '{name}' (index {index}) is non-finite: {value}")
            }
            SpecError::InvertedBounds { index, name, lower, upper } => {
                write!(
                    f,
                    "Bounds for parameter '{name}' (index {index}) must satisfy lower < upper; \
                     got [{lower}, {upper}]"
                )
            }
            SpecError::NonFiniteDefault { index, name, value } => {
                write!(f, "Default for parameter '{name}' (index {index}) is non-finite: {value}")
            }
            SpecError::DefaultOutOfBounds { index, name, value, lower, upper } => {
                write!(
                    f,
                    "Default for parameter '{name}' (index {index}) is {value}, outside its \
                     admissible interval [{lower}, {upper}]"
                )
            }
            SpecError::InvalidStdUpper { index, name, value } => {
                write!(
                    f,
                    "Between-subject std upper bound for parameter '{name}' (index {index}) \
                     must be > 0 and finite when present; got {value}"
                )
            }
            // ---- Hierarchical inclusion ----
            SpecError::UnknownHierarchicalParam { name } => {
                write!(f, "hddm_include names '{name}', which is not a declared parameter")
            }
            SpecError::DuplicateHierarchicalParam { name } => {
                write!(f, "hddm_include lists parameter '{name}' more than once")
            }
            // ---- Response choices ----
            SpecError::TooFewChoices { count } => {
                write!(f, "A model needs at least 2 response choices; got {count}")
            }
            SpecError::DuplicateChoice { value } => {
                write!(f, "Response choice {value} occurs more than once")
            }
            // ---- Slice widths ----
            SpecError::MissingSliceWidth { param, key } => {
                write!(f, "Parameter '{param}' has no slice-width entry under key '{key}'")
            }
            SpecError::InvalidSliceWidth { key, value } => {
                write!(f, "Slice width '{key}' must be finite and > 0; got {value}")
            }
            // ---- Boundary handle ----
            SpecError::MissingBoundary => {
                write!(f, "Specification has no decision-boundary handle.")
            }
        }
    }
}

/// Errors for registry operations (registration, aliasing, lookup).
///
/// [`RegistryError::InvalidSpecification`] wraps the precise [`SpecError`]
/// so callers of `register`/`alias` learn which invariant and which field
/// failed, not just that the specification was invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// The identifier is already registered and no replace was requested.
    DuplicateIdentifier { identifier: String },

    /// The identifier is not registered; carries the registered identifiers.
    UnknownIdentifier { identifier: String, known: Vec<String> },

    /// The specification violated a structural invariant at registration.
    InvalidSpecification { identifier: Option<String>, source: SpecError },
}

impl std::error::Error for RegistryError {}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateIdentifier { identifier } => {
                write!(
                    f,
                    "Model identifier '{identifier}' is already registered; use the replace \
                     operation to overwrite it"
                )
            }
            RegistryError::UnknownIdentifier { identifier, known } => {
                write!(
                    f,
                    "Unknown model identifier '{identifier}'. Registered identifiers: {}",
                    known.join(", ")
                )
            }
            RegistryError::InvalidSpecification { identifier, source } => match identifier {
                Some(name) => write!(f, "Specification for model '{name}' is invalid: {source}"),
                None => write!(f, "Specification is invalid: {source}"),
            },
        }
    }
}

impl From<SpecError> for RegistryError {
    fn from(source: SpecError) -> RegistryError {
        RegistryError::InvalidSpecification { identifier: None, source }
    }
}

/// Convert a [`SpecError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<SpecError> for PyErr {
    fn from(err: SpecError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Convert a [`RegistryError`] into a Python exception.
///
/// Unknown identifiers surface as `KeyError`, matching dict-style lookup
/// semantics downstream consumers expect; everything else is a `ValueError`.
#[cfg(feature = "python-bindings")]
impl From<RegistryError> for PyErr {
    fn from(err: RegistryError) -> PyErr {
        match &err {
            RegistryError::UnknownIdentifier { .. } => PyKeyError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

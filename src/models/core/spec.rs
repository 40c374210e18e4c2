//! Model specification — the parameter-space record for one decision model.
//!
//! Purpose
//! -------
//! Define [`ModelSpec`], the complete parameter-space and metadata record for
//! one sequential-sampling decision model, plus the opaque handles
//! ([`BoundaryRef`], [`DriftRef`]) that point at externally-implemented shape
//! functions. Every downstream consumer — simulator, likelihood evaluator,
//! hierarchical sampler, regression-design builder — reads its slice of this
//! record and nothing else.
//!
//! Key behaviors
//! -------------
//! - Carry the ordered parameter sequence together with its positionally
//!   aligned transform flags, between-subject std bounds, admissible
//!   intervals, and defaults.
//! - Record the decision-boundary handle verbatim and whether it combines
//!   with the separation parameter multiplicatively (default) or additively.
//! - Expose name-based convenience lookups (`param_index`, `is_transformed`,
//!   `is_hierarchical`, `slice_keys`) so consumers never index by hand.
//! - Provide [`ModelSpecBuilder`] for assembling a record field by field;
//!   optional fields carry documented defaults instead of key-presence
//!   semantics.
//!
//! Invariants & assumptions
//! ------------------------
//! - A `ModelSpec` fetched from a registry has passed the full validation
//!   pass in [`crate::models::core::validation`]; the builder itself only
//!   enforces the structural requirement that a boundary handle is present.
//! - Records are logically immutable after validation: registries hand out
//!   shared read-only views and expose no mutation path.
//!
//! Conventions
//! -----------
//! - All per-parameter sequences are positionally aligned with `params`.
//! - Transform flags are `bool`s; a `true` flag means the parameter is
//!   sampled in an unconstrained space and mapped back into its interval via
//!   the scaled-logistic transform in [`crate::numerics::transformations`].
//! - This module contains no I/O and no logging.
use crate::models::core::bounds::ParamBounds;
use crate::models::core::widths::{SliceKeys, SliceWidths};
use crate::models::errors::{SpecError, SpecResult};
use ndarray::Array1;

/// Opaque reference to a decision-boundary shape function.
///
/// The registry stores and exposes the handle verbatim; it never resolves or
/// invokes it. The simulator and likelihood collaborators own the calling
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRef {
    /// Flat boundary at the separation parameter.
    Constant,
    /// Linearly collapsing boundary with angle parameter `theta`.
    Angle,
    /// Weibull-CDF-shaped collapsing boundary with `alpha`/`beta` parameters.
    WeibullCdf,
    /// Generalized-logistic boundary shape.
    GeneralizedLogistic,
    /// Externally supplied shape, referenced by name.
    Custom(&'static str),
}

impl BoundaryRef {
    /// Handle name as downstream collaborators resolve it.
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryRef::Constant => "constant",
            BoundaryRef::Angle => "angle",
            BoundaryRef::WeibullCdf => "weibull_cdf",
            BoundaryRef::GeneralizedLogistic => "generalized_logistic",
            BoundaryRef::Custom(name) => name,
        }
    }
}

/// Opaque reference to a drift shape function.
///
/// Same contract as [`BoundaryRef`]: stored verbatim, resolved and invoked
/// only by the drift-function collaborator. None of the builtin catalog
/// entries set one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftRef {
    /// Constant drift at the rate parameter.
    Constant,
    /// Gamma-shaped drift time course.
    GammaDrift,
    /// Externally supplied shape, referenced by name.
    Custom(&'static str),
}

impl DriftRef {
    /// Handle name as downstream collaborators resolve it.
    pub fn name(&self) -> &'static str {
        match self {
            DriftRef::Constant => "constant",
            DriftRef::GammaDrift => "gamma_drift",
            DriftRef::Custom(name) => name,
        }
    }
}

/// Complete parameter-space specification for one decision model.
///
/// Purpose
/// -------
/// Single source of truth for the model's free parameters, their bounds and
/// defaults, the reparameterization flags used during inference, the
/// hierarchical inclusion set, the admissible response choices, the boundary
/// handle, and the slice-sampler step sizes.
///
/// Fields
/// ------
/// - `name`: unique model identifier.
/// - `doc`: human-readable description; carries no behavioral contract.
/// - `params`: ordered parameter names, length P ≥ 1, unique.
/// - `params_trans`: positional transform flags; `true` marks a parameter
///   sampled in unconstrained space and mapped back into `param_bounds` via
///   a scaled-logistic transform before use.
/// - `params_std_upper`: per-parameter upper bound on the between-subject
///   standard deviation used by the hierarchical layer; `None` marks a
///   parameter whose transform already constrains its variance.
/// - `param_bounds`: admissible closed intervals in untransformed space.
/// - `params_default`: default value per parameter, inside its interval.
/// - `boundary`: opaque decision-boundary handle; never invoked here.
/// - `boundary_multiplicative`: whether the boundary shape combines with the
///   base separation multiplicatively (`true`, the default) or additively.
/// - `drift`: optional opaque drift handle, same contract as `boundary`.
/// - `hddm_include`: subset of `params` that varies by subject under the
///   hierarchical regression layer.
/// - `choices`: ordered distinct discrete response labels, size ≥ 2.
/// - `slice_widths`: step-size table for the component-wise slice sampler.
///
/// Invariants
/// ----------
/// - All per-parameter sequences have length P; see invariants 1–8 of the
///   validation pass. Instances obtained from a registry satisfy them.
///
/// Notes
/// -----
/// - `Clone` performs a deep copy: every field is owned, so a cloned
///   specification shares no mutable state with its source. Independent
///   aliases rely on this.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    /// Unique model identifier.
    pub name: String,
    /// Human-readable description.
    pub doc: String,
    /// Ordered parameter names.
    pub params: Vec<String>,
    /// Positional transform flags.
    pub params_trans: Vec<bool>,
    /// Between-subject std upper bounds; `None` = unbounded.
    pub params_std_upper: Vec<Option<f64>>,
    /// Admissible intervals in untransformed space.
    pub param_bounds: ParamBounds,
    /// Default value per parameter.
    pub params_default: Array1<f64>,
    /// Opaque decision-boundary handle.
    pub boundary: BoundaryRef,
    /// Multiplicative (true) vs additive boundary combination.
    pub boundary_multiplicative: bool,
    /// Optional opaque drift handle.
    pub drift: Option<DriftRef>,
    /// Hierarchical inclusion set, by parameter name.
    pub hddm_include: Vec<String>,
    /// Ordered distinct response labels.
    pub choices: Vec<i64>,
    /// Slice-sampler step sizes.
    pub slice_widths: SliceWidths,
}

impl ModelSpec {
    /// Start building a specification for `name`.
    pub fn builder(name: impl Into<String>) -> ModelSpecBuilder {
        ModelSpecBuilder::new(name)
    }

    /// Number of declared parameters (P).
    pub fn n_params(&self) -> usize {
        self.params.len()
    }

    /// Position of `name` in `params`, if declared.
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|param| param == name)
    }

    /// True when `name` is declared and flagged for transformed-space
    /// sampling. Unknown names read as untransformed.
    pub fn is_transformed(&self, name: &str) -> bool {
        self.param_index(name).and_then(|i| self.params_trans.get(i)).copied().unwrap_or(false)
    }

    /// True when `name` participates in the hierarchical regression layer.
    pub fn is_hierarchical(&self, name: &str) -> bool {
        self.hddm_include.iter().any(|param| param == name)
    }

    /// The `(lower, upper)` interval of `name`, if declared.
    pub fn bounds_of(&self, name: &str) -> Option<(f64, f64)> {
        self.param_index(name).and_then(|i| self.param_bounds.get(i))
    }

    /// The default value of `name`, if declared.
    pub fn default_of(&self, name: &str) -> Option<f64> {
        self.param_index(name).and_then(|i| self.params_default.get(i)).copied()
    }

    /// Step-size keys parameter `name` resolves against, derived from its
    /// transform flag and hierarchical membership. `None` for undeclared
    /// names.
    pub fn slice_keys(&self, name: &str) -> Option<SliceKeys> {
        self.param_index(name).map(|i| {
            let transformed = self.params_trans.get(i).copied().unwrap_or(false);
            SliceKeys::for_param(name, transformed, self.is_hierarchical(name))
        })
    }
}

/// Field-by-field assembler for [`ModelSpec`].
///
/// Optional fields carry documented defaults: `boundary_multiplicative`
/// defaults to `true`, `drift` to `None`, `doc` to empty. The boundary
/// handle has no default; [`ModelSpecBuilder::build`] fails with
/// [`SpecError::MissingBoundary`] when it was never supplied. The full
/// invariant pass runs later, when the assembled record is registered.
#[derive(Debug, Clone, Default)]
pub struct ModelSpecBuilder {
    name: String,
    doc: String,
    params: Vec<String>,
    params_trans: Vec<bool>,
    params_std_upper: Vec<Option<f64>>,
    lower: Vec<f64>,
    upper: Vec<f64>,
    params_default: Vec<f64>,
    boundary: Option<BoundaryRef>,
    boundary_multiplicative: bool,
    drift: Option<DriftRef>,
    hddm_include: Vec<String>,
    choices: Vec<i64>,
    slice_widths: SliceWidths,
}

impl ModelSpecBuilder {
    fn new(name: impl Into<String>) -> Self {
        ModelSpecBuilder {
            name: name.into(),
            boundary_multiplicative: true,
            ..ModelSpecBuilder::default()
        }
    }

    /// Human-readable description.
    pub fn doc(mut self, doc: &str) -> Self {
        self.doc = doc.to_string();
        self
    }

    /// Ordered parameter names.
    pub fn params(mut self, params: &[&str]) -> Self {
        self.params = params.iter().map(|name| name.to_string()).collect();
        self
    }

    /// Positional transform flags, aligned with `params`.
    pub fn trans(mut self, flags: &[bool]) -> Self {
        self.params_trans = flags.to_vec();
        self
    }

    /// Between-subject std upper bounds, aligned with `params`.
    pub fn std_upper(mut self, bounds: &[Option<f64>]) -> Self {
        self.params_std_upper = bounds.to_vec();
        self
    }

    /// Lower/upper interval edges, each aligned with `params`.
    pub fn bounds(mut self, lower: &[f64], upper: &[f64]) -> Self {
        self.lower = lower.to_vec();
        self.upper = upper.to_vec();
        self
    }

    /// Default values, aligned with `params`.
    pub fn defaults(mut self, defaults: &[f64]) -> Self {
        self.params_default = defaults.to_vec();
        self
    }

    /// Decision-boundary handle. Required.
    pub fn boundary(mut self, boundary: BoundaryRef) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Boundary combination mode; `true` (the default) is multiplicative.
    pub fn boundary_multiplicative(mut self, multiplicative: bool) -> Self {
        self.boundary_multiplicative = multiplicative;
        self
    }

    /// Optional drift handle.
    pub fn drift(mut self, drift: DriftRef) -> Self {
        self.drift = Some(drift);
        self
    }

    /// Hierarchical inclusion set, by parameter name.
    pub fn hddm_include(mut self, include: &[&str]) -> Self {
        self.hddm_include = include.iter().map(|name| name.to_string()).collect();
        self
    }

    /// Ordered distinct response labels.
    pub fn choices(mut self, choices: &[i64]) -> Self {
        self.choices = choices.to_vec();
        self
    }

    /// Slice-sampler step sizes as `(key, width)` pairs.
    pub fn slice_widths(mut self, pairs: &[(&str, f64)]) -> Self {
        self.slice_widths = SliceWidths::from_pairs(pairs);
        self
    }

    /// Assemble the record.
    ///
    /// Returns
    /// -------
    /// `SpecResult<ModelSpec>`
    ///   - `Ok(ModelSpec)` once every supplied field is in place.
    ///   - `Err(SpecError::MissingBoundary)` when no boundary handle was set;
    ///     this is the one invariant the builder enforces structurally.
    ///
    /// Notes
    /// -----
    /// - The remaining invariants (lengths, bounds, defaults, inclusion,
    ///   choices, slice widths) are checked by the registry at registration,
    ///   so deliberately malformed records can still be assembled in tests
    ///   and rejected through the typed registration path.
    pub fn build(self) -> SpecResult<ModelSpec> {
        let boundary = self.boundary.ok_or(SpecError::MissingBoundary)?;
        Ok(ModelSpec {
            name: self.name,
            doc: self.doc,
            params: self.params,
            params_trans: self.params_trans,
            params_std_upper: self.params_std_upper,
            param_bounds: ParamBounds::from_slices(&self.lower, &self.upper),
            params_default: Array1::from(self.params_default),
            boundary,
            boundary_multiplicative: self.boundary_multiplicative,
            drift: self.drift,
            hddm_include: self.hddm_include,
            choices: self.choices,
            slice_widths: self.slice_widths,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Builder defaults for optional fields (boundary_multiplicative, drift,
    //   doc) and the MissingBoundary structural check.
    // - Name-based accessors on an assembled specification.
    //
    // They intentionally DO NOT cover:
    // - The full invariant pass; see `models::core::validation` tests.
    // -------------------------------------------------------------------------

    fn minimal_spec() -> ModelSpec {
        ModelSpec::builder("toy")
            .params(&["v", "z"])
            .trans(&[false, true])
            .std_upper(&[Some(1.5), None])
            .bounds(&[-3.0, 0.1], &[3.0, 0.9])
            .defaults(&[0.0, 0.5])
            .boundary(BoundaryRef::Constant)
            .hddm_include(&["z"])
            .choices(&[-1, 1])
            .slice_widths(&[("v", 1.5), ("z", 0.1), ("z_trans", 0.2)])
            .build()
            .expect("minimal spec should assemble")
    }

    #[test]
    fn builder_defaults_multiplicative_boundary_and_no_drift() {
        let spec = minimal_spec();

        assert!(spec.boundary_multiplicative);
        assert_eq!(spec.drift, None);
        assert_eq!(spec.doc, "");
    }

    #[test]
    fn builder_without_boundary_fails_with_missing_boundary() {
        let err = ModelSpec::builder("toy")
            .params(&["v"])
            .trans(&[false])
            .std_upper(&[Some(1.0)])
            .bounds(&[-1.0], &[1.0])
            .defaults(&[0.0])
            .choices(&[0, 1])
            .slice_widths(&[("v", 1.0)])
            .build()
            .unwrap_err();

        assert_eq!(err, SpecError::MissingBoundary);
    }

    #[test]
    fn accessors_resolve_by_name() {
        let spec = minimal_spec();

        assert_eq!(spec.n_params(), 2);
        assert_eq!(spec.param_index("z"), Some(1));
        assert!(spec.is_transformed("z"));
        assert!(!spec.is_transformed("v"));
        assert!(spec.is_hierarchical("z"));
        assert!(!spec.is_hierarchical("v"));
        assert_eq!(spec.bounds_of("v"), Some((-3.0, 3.0)));
        assert_eq!(spec.default_of("z"), Some(0.5));
        assert_eq!(spec.param_index("missing"), None);
        assert_eq!(spec.slice_keys("missing"), None);
    }

    #[test]
    fn slice_keys_reflect_flags_and_hierarchy() {
        let spec = minimal_spec();

        let z_keys = spec.slice_keys("z").expect("z is declared");
        assert_eq!(z_keys.required().collect::<Vec<_>>(), vec!["z", "z_trans"]);
        assert_eq!(z_keys.expected().collect::<Vec<_>>(), vec!["z", "z_trans", "z_std"]);

        let v_keys = spec.slice_keys("v").expect("v is declared");
        assert_eq!(v_keys.required().collect::<Vec<_>>(), vec!["v"]);
    }

    #[test]
    fn clone_is_deep_for_alias_independence() {
        let spec = minimal_spec();
        let mut copy = spec.clone();

        copy.params_default[0] = 9.0;

        assert_eq!(spec.params_default[0], 0.0);
        assert_ne!(spec, copy);
    }

    #[test]
    fn boundary_and_drift_handles_expose_names() {
        assert_eq!(BoundaryRef::Constant.name(), "constant");
        assert_eq!(BoundaryRef::WeibullCdf.name(), "weibull_cdf");
        assert_eq!(BoundaryRef::Custom("exp_c").name(), "exp_c");
        assert_eq!(DriftRef::GammaDrift.name(), "gamma_drift");
    }
}

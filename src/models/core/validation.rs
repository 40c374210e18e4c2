//! Specification validation — the registration-time invariant pass.
//!
//! Purpose
//! -------
//! Centralize the consistency checks every model specification must satisfy
//! before a registry publishes it: array-length agreement, bound ordering,
//! defaults within bounds, unique parameter names, hierarchical inclusion,
//! response-choice sanity, and slice-width resolvability. Silent
//! inconsistency in any of these produces wrong scientific inference
//! downstream rather than a crash, so every check fails fast with a typed,
//! field-naming error.
//!
//! Key behaviors
//! -------------
//! - [`validate`] orchestrates the full pass and short-circuits on the first
//!   structural failure: length agreement is checked before any value-range
//!   check, since value checks are meaningless on mismatched lengths.
//! - Individual `validate_*` helpers are public so constructors and tests
//!   can exercise one invariant at a time, and report the offending
//!   parameter index/name (bounds, defaults) or the offending key/value
//!   (`hddm_include`, `choices`, `slice_widths`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Bounds must be finite with `lower[i] < upper[i]` strictly; zero-width
//!   intervals are rejected (no builtin entry uses one).
//! - Defaults are checked against the *closed* interval: a default equal to
//!   an interval edge is admissible.
//! - Required slice-width keys follow the transform-key resolver: the direct
//!   key always, plus the `_trans` key for transformed parameters. The
//!   hierarchical `_std` key is advisory (see `models::core::widths`).
//! - Stray slice-width keys that no parameter derives are tolerated; they
//!   carry no meaning to consumers and several shipped tables contain them.
//!
//! Conventions
//! -----------
//! - Validation functions return [`SpecResult`] and never panic on invalid
//!   *inputs*; this module contains no I/O and no logging.
//! - The pass runs exactly once per distinct specification instance: at
//!   registration, and again only for independently-copied aliases.
use crate::models::core::bounds::ParamBounds;
use crate::models::core::spec::ModelSpec;
use crate::models::errors::{SpecError, SpecResult};
use ndarray::ArrayView1;
use std::collections::HashSet;

/// Run the full invariant pass over one specification.
///
/// Check order
/// -----------
/// 1. Length agreement across all per-parameter sequences (short-circuits).
/// 2. Parameter-name uniqueness.
/// 3. Bound finiteness and strict ordering.
/// 4. Defaults inside their closed intervals.
/// 5. Between-subject std upper bounds positive where finite.
/// 6. Hierarchical inclusion ⊆ `params`, duplicate-free.
/// 7. Response choices distinct and ≥ 2.
/// 8. Slice widths positive and required keys resolvable.
///
/// The boundary-presence invariant is structural: the builder refuses to
/// assemble a specification without a boundary handle, so it cannot reach
/// this function unset.
///
/// Errors
/// ------
/// The first violated invariant is returned as its [`SpecError`] variant;
/// later checks do not run.
pub fn validate(spec: &ModelSpec) -> SpecResult<()> {
    validate_lengths(spec)?;
    validate_param_names(&spec.params)?;
    validate_bounds(&spec.params, &spec.param_bounds)?;
    validate_defaults(&spec.params, &spec.param_bounds, spec.params_default.view())?;
    validate_std_upper(&spec.params, &spec.params_std_upper)?;
    validate_hddm_include(&spec.params, &spec.hddm_include)?;
    validate_choices(&spec.choices)?;
    validate_slice_widths(spec)?;
    Ok(())
}

/// Check that every per-parameter sequence has length P = `params.len()`.
///
/// Errors
/// ------
/// - `SpecError::EmptyParams` when no parameter is declared.
/// - `SpecError::LengthMismatch` naming the first disagreeing field
///   (`params_trans`, `params_std_upper`, `param_bounds.lower`,
///   `param_bounds.upper`, or `params_default`).
pub fn validate_lengths(spec: &ModelSpec) -> SpecResult<()> {
    let expected = spec.params.len();
    if expected == 0 {
        return Err(SpecError::EmptyParams);
    }

    let fields: [(&'static str, usize); 5] = [
        ("params_trans", spec.params_trans.len()),
        ("params_std_upper", spec.params_std_upper.len()),
        ("param_bounds.lower", spec.param_bounds.lower.len()),
        ("param_bounds.upper", spec.param_bounds.upper.len()),
        ("params_default", spec.params_default.len()),
    ];
    for (field, actual) in fields {
        if actual != expected {
            return Err(SpecError::LengthMismatch { field, expected, actual });
        }
    }
    Ok(())
}

/// Check that `params` contains no duplicate names.
///
/// Errors
/// ------
/// - `SpecError::DuplicateParam` with the index and name of the first
///   repeated entry.
pub fn validate_param_names(params: &[String]) -> SpecResult<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(params.len());
    for (index, name) in params.iter().enumerate() {
        if !seen.insert(name.as_str()) {
            return Err(SpecError::DuplicateParam { index, name: name.clone() });
        }
    }
    Ok(())
}

/// Check bound finiteness and strict per-coordinate ordering.
///
/// Parameters
/// ----------
/// - `params`: parameter names, used to label violations.
/// - `bounds`: the interval pair; assumed length-consistent with `params`
///   (enforced by [`validate_lengths`] before this runs).
///
/// Errors
/// ------
/// - `SpecError::NonFiniteBound` for a NaN/±inf coordinate (lower reported
///   before upper at the same index).
/// - `SpecError::InvertedBounds` when `lower[i] >= upper[i]`.
pub fn validate_bounds(params: &[String], bounds: &ParamBounds) -> SpecResult<()> {
    for (index, name) in params.iter().enumerate() {
        let (lower, upper) = match bounds.get(index) {
            Some(pair) => pair,
            None => break,
        };
        if !lower.is_finite() {
            return Err(SpecError::NonFiniteBound { index, name: name.clone(), value: lower });
        }
        if !upper.is_finite() {
            return Err(SpecError::NonFiniteBound { index, name: name.clone(), value: upper });
        }
        if lower >= upper {
            return Err(SpecError::InvertedBounds { index, name: name.clone(), lower, upper });
        }
    }
    Ok(())
}

/// Check that every default lies inside its closed interval.
///
/// Errors
/// ------
/// - `SpecError::NonFiniteDefault` for a NaN/±inf default.
/// - `SpecError::DefaultOutOfBounds` with the offending index, name, value,
///   and interval.
pub fn validate_defaults(
    params: &[String], bounds: &ParamBounds, defaults: ArrayView1<f64>,
) -> SpecResult<()> {
    for (index, name) in params.iter().enumerate() {
        let value = match defaults.get(index) {
            Some(&value) => value,
            None => break,
        };
        if !value.is_finite() {
            return Err(SpecError::NonFiniteDefault { index, name: name.clone(), value });
        }
        let (lower, upper) = match bounds.get(index) {
            Some(pair) => pair,
            None => break,
        };
        if value < lower || value > upper {
            return Err(SpecError::DefaultOutOfBounds {
                index,
                name: name.clone(),
                value,
                lower,
                upper,
            });
        }
    }
    Ok(())
}

/// Check that finite between-subject std upper bounds are strictly positive.
///
/// `None` entries mark parameters whose transform already constrains the
/// between-subject variance and are always admissible.
///
/// Errors
/// ------
/// - `SpecError::InvalidStdUpper` for a present bound that is NaN, ±inf,
///   or ≤ 0.
pub fn validate_std_upper(params: &[String], std_upper: &[Option<f64>]) -> SpecResult<()> {
    for (index, name) in params.iter().enumerate() {
        if let Some(Some(value)) = std_upper.get(index) {
            if !value.is_finite() || *value <= 0.0 {
                return Err(SpecError::InvalidStdUpper {
                    index,
                    name: name.clone(),
                    value: *value,
                });
            }
        }
    }
    Ok(())
}

/// Check that the hierarchical inclusion set is a duplicate-free subset of
/// `params`.
///
/// Errors
/// ------
/// - `SpecError::UnknownHierarchicalParam` naming the first entry absent
///   from `params`.
/// - `SpecError::DuplicateHierarchicalParam` naming the first repeated
///   entry.
pub fn validate_hddm_include(params: &[String], include: &[String]) -> SpecResult<()> {
    let declared: HashSet<&str> = params.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(include.len());
    for name in include {
        if !declared.contains(name.as_str()) {
            return Err(SpecError::UnknownHierarchicalParam { name: name.clone() });
        }
        if !seen.insert(name.as_str()) {
            return Err(SpecError::DuplicateHierarchicalParam { name: name.clone() });
        }
    }
    Ok(())
}

/// Check that response choices are distinct and at least two.
///
/// Errors
/// ------
/// - `SpecError::TooFewChoices` with the observed count.
/// - `SpecError::DuplicateChoice` naming the first repeated label.
pub fn validate_choices(choices: &[i64]) -> SpecResult<()> {
    if choices.len() < 2 {
        return Err(SpecError::TooFewChoices { count: choices.len() });
    }
    let mut seen: HashSet<i64> = HashSet::with_capacity(choices.len());
    for &value in choices {
        if !seen.insert(value) {
            return Err(SpecError::DuplicateChoice { value });
        }
    }
    Ok(())
}

/// Check the slice-width table: stored widths must be finite and > 0, and
/// every parameter's required keys (per the transform-key resolver) must
/// resolve.
///
/// Errors
/// ------
/// - `SpecError::InvalidSliceWidth` naming the first bad `(key, width)`
///   entry.
/// - `SpecError::MissingSliceWidth` naming the parameter and the key that
///   failed to resolve.
pub fn validate_slice_widths(spec: &ModelSpec) -> SpecResult<()> {
    for (key, width) in spec.slice_widths.iter() {
        if !width.is_finite() || width <= 0.0 {
            return Err(SpecError::InvalidSliceWidth { key: key.to_string(), value: width });
        }
    }

    for name in &spec.params {
        let keys = match spec.slice_keys(name) {
            Some(keys) => keys,
            None => continue,
        };
        for key in keys.required() {
            if !spec.slice_widths.contains_key(key) {
                return Err(SpecError::MissingSliceWidth {
                    param: name.clone(),
                    key: key.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::spec::{BoundaryRef, ModelSpec};
    use crate::models::core::widths::SliceWidths;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance of a well-formed specification by the full pass.
    // - Rejection of each invariant violation with the matching SpecError
    //   variant and payload, including the short-circuit ordering of length
    //   checks before value checks.
    //
    // They intentionally DO NOT cover:
    // - Registry-level wrapping into RegistryError::InvalidSpecification
    //   (see `models::registry` tests).
    // - The builtin catalog entries; the integration suite sweeps those.
    // -------------------------------------------------------------------------

    fn well_formed() -> ModelSpec {
        ModelSpec::builder("toy")
            .params(&["v", "a", "z"])
            .trans(&[false, false, true])
            .std_upper(&[Some(1.5), Some(1.0), None])
            .bounds(&[-3.0, 0.3, 0.1], &[3.0, 2.5, 0.9])
            .defaults(&[0.0, 1.0, 0.5])
            .boundary(BoundaryRef::Constant)
            .hddm_include(&["z"])
            .choices(&[-1, 1])
            .slice_widths(&[
                ("v", 1.5),
                ("v_std", 1.0),
                ("a", 1.0),
                ("a_std", 1.0),
                ("z", 0.1),
                ("z_trans", 0.2),
            ])
            .build()
            .expect("toy spec should assemble")
    }

    #[test]
    fn full_pass_accepts_well_formed_spec() {
        assert_eq!(validate(&well_formed()), Ok(()));
    }

    #[test]
    // Purpose
    // -------
    // A length mismatch must short-circuit the pass before value checks, even
    // when the truncated sequence would also fail a value check.
    fn length_mismatch_is_reported_before_value_checks() {
        let mut spec = well_formed();
        spec.params_trans = vec![false];
        // Also break a default; the length error must still win.
        spec.params_default[0] = 99.0;

        let err = validate(&spec).unwrap_err();
        assert_eq!(err, SpecError::LengthMismatch { field: "params_trans", expected: 3, actual: 1 });
    }

    #[test]
    fn empty_params_is_rejected() {
        let mut spec = well_formed();
        spec.params = Vec::new();
        spec.params_trans = Vec::new();

        assert_eq!(validate_lengths(&spec), Err(SpecError::EmptyParams));
    }

    #[test]
    fn duplicate_param_name_is_rejected_with_index() {
        let params = vec!["v".to_string(), "a".to_string(), "v".to_string()];

        let err = validate_param_names(&params).unwrap_err();
        assert_eq!(err, SpecError::DuplicateParam { index: 2, name: "v".to_string() });
    }

    #[test]
    fn inverted_bounds_are_rejected_with_param_name() {
        let mut spec = well_formed();
        spec.param_bounds.lower[1] = 5.0;

        let err = validate(&spec).unwrap_err();
        assert_eq!(
            err,
            SpecError::InvertedBounds { index: 1, name: "a".to_string(), lower: 5.0, upper: 2.5 }
        );
    }

    #[test]
    fn zero_width_interval_is_rejected() {
        let mut spec = well_formed();
        spec.param_bounds.lower[0] = 3.0;
        // lower == upper: degenerate interval, not admissible.
        let err = validate(&spec).unwrap_err();
        assert!(matches!(err, SpecError::InvertedBounds { index: 0, .. }));
    }

    #[test]
    fn non_finite_bound_is_rejected() {
        let mut spec = well_formed();
        spec.param_bounds.upper[2] = f64::NAN;

        let err = validate(&spec).unwrap_err();
        assert!(matches!(err, SpecError::NonFiniteBound { index: 2, .. }));
    }

    #[test]
    fn default_outside_interval_is_rejected_with_payload() {
        let mut spec = well_formed();
        spec.params_default[2] = 0.95;

        let err = validate(&spec).unwrap_err();
        assert_eq!(
            err,
            SpecError::DefaultOutOfBounds {
                index: 2,
                name: "z".to_string(),
                value: 0.95,
                lower: 0.1,
                upper: 0.9,
            }
        );
    }

    #[test]
    fn default_on_interval_edge_is_accepted() {
        let mut spec = well_formed();
        spec.params_default[2] = 0.9;

        assert_eq!(validate(&spec), Ok(()));
    }

    #[test]
    fn non_positive_std_upper_is_rejected() {
        let mut spec = well_formed();
        spec.params_std_upper[0] = Some(0.0);

        let err = validate(&spec).unwrap_err();
        assert!(matches!(err, SpecError::InvalidStdUpper { index: 0, .. }));
    }

    #[test]
    // Purpose
    // -------
    // The crafted-invalid case from the registry contract: an inclusion set
    // naming an undeclared parameter must fail, naming that parameter.
    fn hddm_include_outside_params_is_rejected() {
        let mut spec = well_formed();
        spec.hddm_include = vec!["q".to_string()];

        let err = validate(&spec).unwrap_err();
        assert_eq!(err, SpecError::UnknownHierarchicalParam { name: "q".to_string() });
    }

    #[test]
    fn duplicate_hddm_include_entry_is_rejected() {
        let mut spec = well_formed();
        spec.hddm_include = vec!["z".to_string(), "z".to_string()];

        let err = validate(&spec).unwrap_err();
        assert_eq!(err, SpecError::DuplicateHierarchicalParam { name: "z".to_string() });
    }

    #[test]
    fn single_choice_is_rejected() {
        assert_eq!(validate_choices(&[1]), Err(SpecError::TooFewChoices { count: 1 }));
        assert_eq!(validate_choices(&[]), Err(SpecError::TooFewChoices { count: 0 }));
    }

    #[test]
    fn duplicate_choice_is_rejected() {
        assert_eq!(validate_choices(&[0, 1, 0]), Err(SpecError::DuplicateChoice { value: 0 }));
        assert_eq!(validate_choices(&[-1, 1]), Ok(()));
        assert_eq!(validate_choices(&[0, 1, 2, 3]), Ok(()));
    }

    #[test]
    // Purpose
    // -------
    // A transformed parameter whose `_trans` step is missing must fail,
    // naming both the parameter and the unresolved key.
    fn missing_trans_width_is_rejected() {
        let mut spec = well_formed();
        spec.slice_widths = SliceWidths::from_pairs(&[("v", 1.5), ("a", 1.0), ("z", 0.1)]);

        let err = validate(&spec).unwrap_err();
        assert_eq!(
            err,
            SpecError::MissingSliceWidth { param: "z".to_string(), key: "z_trans".to_string() }
        );
    }

    #[test]
    fn missing_direct_width_is_rejected() {
        let mut spec = well_formed();
        spec.slice_widths = SliceWidths::from_pairs(&[("v", 1.5), ("z", 0.1), ("z_trans", 0.2)]);

        let err = validate(&spec).unwrap_err();
        assert_eq!(
            err,
            SpecError::MissingSliceWidth { param: "a".to_string(), key: "a".to_string() }
        );
    }

    #[test]
    fn non_positive_width_is_rejected_by_key() {
        let mut spec = well_formed();
        spec.slice_widths =
            SliceWidths::from_pairs(&[("v", 1.5), ("a", -1.0), ("z", 0.1), ("z_trans", 0.2)]);

        let err = validate(&spec).unwrap_err();
        assert_eq!(err, SpecError::InvalidSliceWidth { key: "a".to_string(), value: -1.0 });
    }

    #[test]
    // Purpose
    // -------
    // A missing hierarchical `_std` entry is tolerated (advisory key), and
    // stray keys no parameter derives are ignored.
    fn advisory_std_key_and_stray_keys_are_tolerated() {
        let mut spec = well_formed();
        // z is hierarchical but the table carries no z_std; "theta" is stray.
        spec.slice_widths = SliceWidths::from_pairs(&[
            ("v", 1.5),
            ("a", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("theta", 0.1),
        ]);

        assert_eq!(validate(&spec), Ok(()));
    }
}

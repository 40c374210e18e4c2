//! Slice widths — step-size table and the transform-key resolver.
//!
//! Purpose
//! -------
//! Hold the per-parameter step sizes consumed by the component-wise slice
//! sampler, and centralize the naming convention that connects a parameter
//! to its step-size keys so no consumer has to re-derive it.
//!
//! Key behaviors
//! -------------
//! - Store a key → width mapping ([`SliceWidths`]) with deterministic
//!   iteration order.
//! - Derive the expected key set for a parameter from its transform flag and
//!   hierarchical membership ([`SliceKeys::for_param`]): the direct key is
//!   always the parameter name; a transformed parameter adds `<name>_trans`
//!   for the transformed-space step; a hierarchical parameter adds
//!   `<name>_std` for the between-subject standard-deviation step.
//! - Distinguish *required* keys (direct, and `_trans` when transformed)
//!   from the merely *expected* hierarchical `_std` key, which several
//!   shipped tables omit and samplers resolve via direct-key fallback.
//!
//! Conventions
//! -----------
//! - Keys not derivable from any declared parameter are tolerated: the
//!   validation pass checks that required keys resolve, not that every key
//!   is spoken for. Stray keys carry no meaning to consumers.
//! - Widths are plain `f64` step sizes; positivity and finiteness are
//!   enforced by the validation pass at registration time.
use std::collections::BTreeMap;
use std::iter;

/// Suffix of transformed-space step-size keys.
pub const TRANS_SUFFIX: &str = "_trans";

/// Suffix of between-subject standard-deviation step-size keys.
pub const STD_SUFFIX: &str = "_std";

/// Key of the transformed-space step for `name`.
pub fn trans_key(name: &str) -> String {
    format!("{name}{TRANS_SUFFIX}")
}

/// Key of the between-subject standard-deviation step for `name`.
pub fn std_key(name: &str) -> String {
    format!("{name}{STD_SUFFIX}")
}

/// The step-size keys one parameter resolves against.
///
/// Produced by [`SliceKeys::for_param`], the pure lookup-key function of the
/// registry: no side effects, no table access. The validation pass insists
/// on [`SliceKeys::required`]; step-size consumers may additionally probe
/// the keys from [`SliceKeys::expected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceKeys {
    /// Direct-space key; always the parameter name itself.
    pub direct: String,
    /// `<name>_trans` when the parameter is sampled in transformed space.
    pub trans: Option<String>,
    /// `<name>_std` when the parameter varies hierarchically by subject.
    pub hier_std: Option<String>,
}

impl SliceKeys {
    /// Derive the key set for a parameter.
    ///
    /// Parameters
    /// ----------
    /// - `name`: the parameter name as declared in `params`.
    /// - `transformed`: the parameter's transform flag; `true` adds the
    ///   `<name>_trans` key for the transformed-space step.
    /// - `hierarchical`: whether the parameter appears in the hierarchical
    ///   inclusion set; `true` adds the `<name>_std` key for the
    ///   between-subject standard-deviation step.
    ///
    /// Returns
    /// -------
    /// A [`SliceKeys`] with the direct key always populated and the two
    /// suffixed keys present per the flags.
    pub fn for_param(name: &str, transformed: bool, hierarchical: bool) -> SliceKeys {
        SliceKeys {
            direct: name.to_string(),
            trans: transformed.then(|| trans_key(name)),
            hier_std: hierarchical.then(|| std_key(name)),
        }
    }

    /// Keys that must resolve in the owning table for validation to pass:
    /// the direct key, plus the `_trans` key for transformed parameters.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        iter::once(self.direct.as_str()).chain(self.trans.as_deref())
    }

    /// All keys a step-size consumer may probe: [`SliceKeys::required`]
    /// plus the hierarchical `_std` key when present. The `_std` key is
    /// advisory; absent entries fall back to the direct width.
    pub fn expected(&self) -> impl Iterator<Item = &str> {
        self.required().chain(self.hier_std.as_deref())
    }
}

/// Step-size table of one model specification.
///
/// Maps step-size keys (parameter names plus `_trans`/`_std` variants) to
/// strictly positive slice-sampler widths. Iteration order is the key's
/// lexicographic order, so repeated reads observe identical sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliceWidths {
    widths: BTreeMap<String, f64>,
}

impl SliceWidths {
    /// Empty table.
    pub fn new() -> Self {
        SliceWidths { widths: BTreeMap::new() }
    }

    /// Build a table from `(key, width)` pairs. Later duplicates of a key
    /// overwrite earlier ones, matching literal-table semantics.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        let widths = pairs.iter().map(|&(key, width)| (key.to_string(), width)).collect();
        SliceWidths { widths }
    }

    /// Width stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.widths.get(key).copied()
    }

    /// True when `key` has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.widths.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// True when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Iterate `(key, width)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.widths.iter().map(|(key, &width)| (key.as_str(), width))
    }

    /// Step size for sampling parameter `name` within a subject.
    ///
    /// Transformed parameters prefer the `<name>_trans` width and fall back
    /// to the direct width; untransformed parameters read the direct width.
    /// Returns `None` only when the table resolves neither key, which a
    /// validated specification never exhibits.
    pub fn sampling_width(&self, name: &str, transformed: bool) -> Option<f64> {
        if transformed {
            if let Some(width) = self.get(&trans_key(name)) {
                return Some(width);
            }
        }
        self.get(name)
    }

    /// Step size for the between-subject standard deviation of `name`.
    ///
    /// Reads `<name>_std` and falls back to the direct width when the table
    /// has no dedicated entry (several shipped tables omit `_std` keys for
    /// hierarchical parameters).
    pub fn hierarchical_std_width(&self, name: &str) -> Option<f64> {
        self.get(&std_key(name)).or_else(|| self.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Key derivation for all four (transformed, hierarchical) combinations.
    // - The required vs expected key split.
    // - Consumer-facing width resolution including fallbacks.
    //
    // They intentionally DO NOT cover:
    // - Rejection of missing/invalid widths for whole specifications; that
    //   lives in `models::core::validation`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // A plain bounded parameter resolves against its own name only.
    fn keys_for_untransformed_non_hierarchical_param() {
        let keys = SliceKeys::for_param("v", false, false);

        assert_eq!(keys.direct, "v");
        assert_eq!(keys.trans, None);
        assert_eq!(keys.hier_std, None);
        assert_eq!(keys.required().collect::<Vec<_>>(), vec!["v"]);
        assert_eq!(keys.expected().collect::<Vec<_>>(), vec!["v"]);
    }

    #[test]
    // Purpose
    // -------
    // A transformed parameter requires its `_trans` key in addition to the
    // direct key; a hierarchical one additionally expects `_std`.
    fn keys_for_transformed_hierarchical_param() {
        let keys = SliceKeys::for_param("z", true, true);

        assert_eq!(keys.required().collect::<Vec<_>>(), vec!["z", "z_trans"]);
        assert_eq!(keys.expected().collect::<Vec<_>>(), vec!["z", "z_trans", "z_std"]);
    }

    #[test]
    // Purpose
    // -------
    // The hierarchical `_std` key is expected but never required.
    fn std_key_is_expected_not_required() {
        let keys = SliceKeys::for_param("g", false, true);

        assert_eq!(keys.required().collect::<Vec<_>>(), vec!["g"]);
        assert_eq!(keys.expected().collect::<Vec<_>>(), vec!["g", "g_std"]);
    }

    #[test]
    fn sampling_width_prefers_trans_entry_for_transformed_params() {
        let widths = SliceWidths::from_pairs(&[("z", 0.1), ("z_trans", 0.2)]);

        assert_eq!(widths.sampling_width("z", true), Some(0.2));
        assert_eq!(widths.sampling_width("z", false), Some(0.1));
    }

    #[test]
    fn sampling_width_falls_back_to_direct_entry() {
        let widths = SliceWidths::from_pairs(&[("sv", 0.5)]);

        // Transformed lookup with no `_trans` entry degrades to the direct
        // width rather than failing.
        assert_eq!(widths.sampling_width("sv", true), Some(0.5));
        assert_eq!(widths.sampling_width("missing", false), None);
    }

    #[test]
    fn hierarchical_std_width_falls_back_to_direct_entry() {
        let widths = SliceWidths::from_pairs(&[("g", 0.1), ("g_std", 0.3), ("sv", 0.5)]);

        assert_eq!(widths.hierarchical_std_width("g"), Some(0.3));
        assert_eq!(widths.hierarchical_std_width("sv"), Some(0.5));
        assert_eq!(widths.hierarchical_std_width("missing"), None);
    }

    #[test]
    fn iteration_is_key_ordered_and_duplicates_overwrite() {
        let widths = SliceWidths::from_pairs(&[("b", 2.0), ("a", 1.0), ("b", 3.0)]);

        let pairs: Vec<_> = widths.iter().collect();
        assert_eq!(pairs, vec![("a", 1.0), ("b", 3.0)]);
        assert_eq!(widths.len(), 2);
    }
}

//! Model registry — identifier → specification mapping with eager validation.
//!
//! Purpose
//! -------
//! Own the mapping from model identifier to validated [`ModelSpec`] and
//! mediate all lookups. Registration runs the full invariant pass before a
//! specification becomes visible, so a caller can never receive a record
//! that later fails mid-simulation due to a structural defect.
//!
//! Key behaviors
//! -------------
//! - `register` / `replace`: publish a specification under its own name,
//!   failing with typed errors on duplicates, unknown identifiers, or
//!   invariant violations (the error names the invariant and field, not
//!   just "invalid").
//! - `alias`: register an existing specification under a second identifier,
//!   either sharing the same validated instance or deep-copying into an
//!   independently-owned, separately-validated record — chosen explicitly
//!   per call site, never a shallow copy that silently mixes the two.
//! - `get` / `list_identifiers`: immutable, idempotent reads.
//!
//! Concurrency
//! -----------
//! The mapping lives behind an atomically-swappable snapshot
//! (`RwLock<Arc<Snapshot>>`). Writers rebuild the snapshot and swap the
//! `Arc` whole, so concurrent readers observe either the pre- or
//! post-registration state, never a specification mid-validation. Readers
//! clone the `Arc` and drop the lock before touching any entry.
//!
//! Downstream usage
//! ----------------
//! - Most callers want [`model_registry`], the process-wide registry seeded
//!   once from the builtin catalog; `Registry::new` exists for tests and
//!   for plugin-style extension registries.
//! - Lookups hand out `Arc<ModelSpec>`; no mutation path is exposed, so a
//!   shared alias can never diverge from its primary name.
use crate::models::catalog;
use crate::models::core::spec::ModelSpec;
use crate::models::core::validation;
use crate::models::errors::{RegistryError, RegistryResult};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

/// One published state of the mapping. Cheap to clone: entries are `Arc`s.
#[derive(Debug, Clone, Default)]
struct Snapshot {
    specs: HashMap<String, Arc<ModelSpec>>,
    order: Vec<String>,
}

/// Identifier → validated specification mapping.
///
/// See the module docs for the publication discipline. All operations are
/// `&self`; interior mutability is confined to the snapshot swap.
#[derive(Debug, Default)]
pub struct Registry {
    inner: RwLock<Arc<Snapshot>>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Registry { inner: RwLock::new(Arc::new(Snapshot::default())) }
    }

    /// Clone the current snapshot out of the lock.
    fn snapshot(&self) -> Arc<Snapshot> {
        self.inner.read().expect("model registry lock poisoned").clone()
    }

    /// Validate and publish `spec` under its own name.
    ///
    /// Errors
    /// ------
    /// - `RegistryError::DuplicateIdentifier` when the name is taken;
    ///   replacing an existing entry is the distinct [`Registry::replace`]
    ///   operation.
    /// - `RegistryError::InvalidSpecification` wrapping the precise
    ///   [`crate::models::errors::SpecError`] when an invariant fails; the
    ///   registry state is untouched in that case.
    pub fn register(&self, spec: ModelSpec) -> RegistryResult<()> {
        validation::validate(&spec).map_err(|source| RegistryError::InvalidSpecification {
            identifier: Some(spec.name.clone()),
            source,
        })?;

        let mut guard = self.inner.write().expect("model registry lock poisoned");
        if guard.specs.contains_key(&spec.name) {
            return Err(RegistryError::DuplicateIdentifier { identifier: spec.name });
        }
        let mut next = Snapshot::clone(&guard);
        next.order.push(spec.name.clone());
        next.specs.insert(spec.name.clone(), Arc::new(spec));
        *guard = Arc::new(next);
        Ok(())
    }

    /// Validate `spec` and overwrite the existing entry of the same name.
    ///
    /// The identifier keeps its original registration-order position.
    /// Identifiers that shared the old instance via a shared alias keep the
    /// old instance; replacement rebinds one name only.
    ///
    /// Errors
    /// ------
    /// - `RegistryError::UnknownIdentifier` when nothing is registered under
    ///   the name; replacing is not implicit registration.
    /// - `RegistryError::InvalidSpecification` on invariant failure.
    pub fn replace(&self, spec: ModelSpec) -> RegistryResult<()> {
        validation::validate(&spec).map_err(|source| RegistryError::InvalidSpecification {
            identifier: Some(spec.name.clone()),
            source,
        })?;

        let mut guard = self.inner.write().expect("model registry lock poisoned");
        if !guard.specs.contains_key(&spec.name) {
            return Err(RegistryError::UnknownIdentifier {
                identifier: spec.name,
                known: guard.order.clone(),
            });
        }
        let mut next = Snapshot::clone(&guard);
        next.specs.insert(spec.name.clone(), Arc::new(spec));
        *guard = Arc::new(next);
        Ok(())
    }

    /// Register `existing` under the additional identifier `new_identifier`.
    ///
    /// Parameters
    /// ----------
    /// - `independent_copy`: `false` shares the *same validated instance* —
    ///   both names resolve to one record, validated once. `true` deep-copies
    ///   the record (every field is owned, so no nested state is shared) and
    ///   validates the copy as a distinct instance before publishing.
    ///
    /// Errors
    /// ------
    /// - `RegistryError::UnknownIdentifier` when `existing` is absent.
    /// - `RegistryError::DuplicateIdentifier` when `new_identifier` is taken.
    /// - `RegistryError::InvalidSpecification` only on the independent-copy
    ///   path (a shared alias is already validated).
    pub fn alias(
        &self, existing: &str, new_identifier: &str, independent_copy: bool,
    ) -> RegistryResult<()> {
        let mut guard = self.inner.write().expect("model registry lock poisoned");
        let spec = match guard.specs.get(existing) {
            Some(spec) => spec.clone(),
            None => {
                return Err(RegistryError::UnknownIdentifier {
                    identifier: existing.to_string(),
                    known: guard.order.clone(),
                });
            }
        };
        if guard.specs.contains_key(new_identifier) {
            return Err(RegistryError::DuplicateIdentifier {
                identifier: new_identifier.to_string(),
            });
        }

        let published = if independent_copy {
            let mut copy = ModelSpec::clone(&spec);
            copy.name = new_identifier.to_string();
            validation::validate(&copy).map_err(|source| RegistryError::InvalidSpecification {
                identifier: Some(new_identifier.to_string()),
                source,
            })?;
            Arc::new(copy)
        } else {
            spec
        };

        let mut next = Snapshot::clone(&guard);
        next.order.push(new_identifier.to_string());
        next.specs.insert(new_identifier.to_string(), published);
        *guard = Arc::new(next);
        Ok(())
    }

    /// Immutable view of the specification registered under `identifier`.
    ///
    /// Repeated calls with the same identifier return observably identical
    /// data; the returned `Arc` stays valid even if the identifier is later
    /// replaced.
    ///
    /// Errors
    /// ------
    /// - `RegistryError::UnknownIdentifier` naming the identifier and the
    ///   currently registered ones.
    pub fn get(&self, identifier: &str) -> RegistryResult<Arc<ModelSpec>> {
        let snapshot = self.snapshot();
        snapshot.specs.get(identifier).cloned().ok_or_else(|| RegistryError::UnknownIdentifier {
            identifier: identifier.to_string(),
            known: snapshot.order.clone(),
        })
    }

    /// True when `identifier` is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.snapshot().specs.contains_key(identifier)
    }

    /// All registered identifiers, alias and primary alike, in registration
    /// order.
    pub fn list_identifiers(&self) -> Vec<String> {
        self.snapshot().order.clone()
    }

    /// Number of registered identifiers (aliases count).
    pub fn len(&self) -> usize {
        self.snapshot().order.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.snapshot().order.is_empty()
    }
}

/// Process-wide registry seeded once from the builtin catalog.
///
/// Initialization is lazy and happens at most once (`OnceLock`); afterwards
/// the registry is read-only for ordinary consumers. A defect in the builtin
/// literal table is a programming error and aborts with a message naming the
/// failed entry rather than limping on with a partial table.
pub fn model_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        catalog::builtin_registry().expect("builtin model table failed validation")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::spec::BoundaryRef;
    use crate::models::errors::SpecError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - register/replace/alias/get/list_identifiers semantics, including the
    //   typed failures for duplicates, unknown identifiers, and invalid
    //   specifications.
    // - Shared vs independent alias ownership (Arc identity and deep-copy
    //   independence).
    //
    // They intentionally DO NOT cover:
    // - Individual invariant checks (see `models::core::validation` tests).
    // - The builtin catalog contents (see the integration suite).
    // -------------------------------------------------------------------------

    fn toy_spec(name: &str) -> ModelSpec {
        ModelSpec::builder(name)
            .params(&["v", "z"])
            .trans(&[false, true])
            .std_upper(&[Some(1.5), None])
            .bounds(&[-3.0, 0.1], &[3.0, 0.9])
            .defaults(&[0.0, 0.5])
            .boundary(BoundaryRef::Constant)
            .hddm_include(&["z"])
            .choices(&[-1, 1])
            .slice_widths(&[("v", 1.5), ("v_std", 1.0), ("z", 0.1), ("z_trans", 0.2)])
            .build()
            .expect("toy spec should assemble")
    }

    #[test]
    fn register_then_get_round_trips() {
        let registry = Registry::new();
        registry.register(toy_spec("toy")).expect("registration should succeed");

        let spec = registry.get("toy").expect("toy is registered");
        assert_eq!(spec.name, "toy");
        assert_eq!(registry.list_identifiers(), vec!["toy".to_string()]);
        assert!(registry.contains("toy"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Two successive gets must return observably identical data (idempotent
    // read); with no intervening writes they are the same instance.
    fn get_is_idempotent() {
        let registry = Registry::new();
        registry.register(toy_spec("toy")).expect("registration should succeed");

        let first = registry.get("toy").expect("toy is registered");
        let second = registry.get("toy").expect("toy is registered");
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn duplicate_registration_fails_without_replace() {
        let registry = Registry::new();
        registry.register(toy_spec("toy")).expect("first registration should succeed");

        let err = registry.register(toy_spec("toy")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateIdentifier { identifier: "toy".to_string() });
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn replace_overwrites_and_requires_existing_entry() {
        let registry = Registry::new();
        registry.register(toy_spec("toy")).expect("registration should succeed");

        let mut updated = toy_spec("toy");
        updated.params_default[0] = 1.0;
        registry.replace(updated).expect("replace should succeed");
        let spec = registry.get("toy").expect("toy is registered");
        assert_eq!(spec.params_default[0], 1.0);

        let err = registry.replace(toy_spec("other")).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownIdentifier { identifier, .. }
            if identifier == "other"));
    }

    #[test]
    // Purpose
    // -------
    // Registration of an invariant-violating specification must fail with
    // InvalidSpecification carrying the precise SpecError, and must leave
    // the registry untouched.
    fn invalid_specification_is_rejected_eagerly() {
        let registry = Registry::new();
        let mut bad = toy_spec("bad");
        bad.hddm_include = vec!["q".to_string()];

        let err = registry.register(bad).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidSpecification {
                identifier: Some("bad".to_string()),
                source: SpecError::UnknownHierarchicalParam { name: "q".to_string() },
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_lookup_names_identifier_and_known_set() {
        let registry = Registry::new();
        registry.register(toy_spec("toy")).expect("registration should succeed");

        let err = registry.get("not_a_model").unwrap_err();
        match err {
            RegistryError::UnknownIdentifier { identifier, known } => {
                assert_eq!(identifier, "not_a_model");
                assert_eq!(known, vec!["toy".to_string()]);
            }
            other => panic!("expected UnknownIdentifier, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // A shared alias resolves to the *same validated instance*: field-for-
    // field equality and Arc identity.
    fn shared_alias_resolves_to_same_instance() {
        let registry = Registry::new();
        registry.register(toy_spec("weibull")).expect("registration should succeed");
        registry.alias("weibull", "weibull_cdf", false).expect("alias should succeed");

        let primary = registry.get("weibull").expect("primary name resolves");
        let aliased = registry.get("weibull_cdf").expect("alias resolves");
        assert!(Arc::ptr_eq(&primary, &aliased));
        assert_eq!(primary, aliased);
        assert_eq!(
            registry.list_identifiers(),
            vec!["weibull".to_string(), "weibull_cdf".to_string()]
        );
    }

    #[test]
    // Purpose
    // -------
    // An independent alias owns a deep copy under the new name: equal in
    // every field except `name`, distinct instance.
    fn independent_alias_owns_a_deep_copy() {
        let registry = Registry::new();
        registry.register(toy_spec("full_ddm")).expect("registration should succeed");
        registry.alias("full_ddm", "full_ddm2", true).expect("alias should succeed");

        let primary = registry.get("full_ddm").expect("primary name resolves");
        let copy = registry.get("full_ddm2").expect("alias resolves");
        assert!(!Arc::ptr_eq(&primary, &copy));
        assert_eq!(copy.name, "full_ddm2");
        assert_eq!(primary.params, copy.params);
        assert_eq!(primary.param_bounds, copy.param_bounds);
        assert_eq!(primary.slice_widths, copy.slice_widths);
    }

    #[test]
    fn alias_failures_are_typed() {
        let registry = Registry::new();
        registry.register(toy_spec("toy")).expect("registration should succeed");

        let err = registry.alias("absent", "other", false).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownIdentifier { identifier, .. }
            if identifier == "absent"));

        let err = registry.alias("toy", "toy", false).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateIdentifier { identifier: "toy".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // Replacing a primary name must not rebind a previously shared alias:
    // the alias keeps the instance it was registered with.
    fn replace_does_not_rebind_shared_aliases() {
        let registry = Registry::new();
        registry.register(toy_spec("toy")).expect("registration should succeed");
        registry.alias("toy", "toy_alias", false).expect("alias should succeed");

        let mut updated = toy_spec("toy");
        updated.params_default[0] = 2.0;
        registry.replace(updated).expect("replace should succeed");

        let primary = registry.get("toy").expect("primary resolves");
        let aliased = registry.get("toy_alias").expect("alias resolves");
        assert_eq!(primary.params_default[0], 2.0);
        assert_eq!(aliased.params_default[0], 0.0);
    }
}

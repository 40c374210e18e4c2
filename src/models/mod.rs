//! models — the model-specification registry stack.
//!
//! Purpose
//! -------
//! Provide the single source of truth for the parameter spaces of the
//! shipped sequential-sampling decision models: the specification record
//! and its primitives in [`core`], the shared error surface in [`errors`],
//! the identifier → specification mapping in [`registry`], and the builtin
//! literal table in [`catalog`]. This is the surface downstream consumers
//! (simulator, likelihood evaluator, hierarchical sampler, regression
//! builder, and the Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Expose validated, immutable [`ModelSpec`] records through
//!   [`Registry`] lookups; the process-wide catalog registry is reached via
//!   [`model_registry`].
//! - Centralize the error taxonomy (`SpecError`, `RegistryError`) so every
//!   registration or lookup failure is typed and names the offending
//!   field, identifier, or key.
//! - Re-export the everyday types via [`prelude`] for ergonomic imports.
//!
//! Invariants & assumptions
//! ------------------------
//! - Any record obtained from a registry satisfies the full invariant pass
//!   in [`core::validation`]; consumers never re-check lengths, bounds, or
//!   key resolvability.
//! - Records are immutable after publication; aliases either share the
//!   validated instance or own a deep copy, never anything in between.
pub mod catalog;
pub mod core;
pub mod errors;
pub mod registry;

pub use self::core::{BoundaryRef, DriftRef, ModelSpec, ModelSpecBuilder, ParamBounds};
pub use errors::{RegistryError, RegistryResult, SpecError, SpecResult};
pub use registry::{model_registry, Registry};

/// Everyday imports for registry consumers.
pub mod prelude {
    pub use crate::models::catalog::builtin_registry;
    pub use crate::models::core::{
        BoundaryRef, DriftRef, ModelSpec, ModelSpecBuilder, ParamBounds, SliceKeys, SliceWidths,
    };
    pub use crate::models::errors::{RegistryError, RegistryResult, SpecError, SpecResult};
    pub use crate::models::registry::{model_registry, Registry};
}

//! core — specification primitives: record type, bounds, widths, validation.
//!
//! Purpose
//! -------
//! Collect the building blocks of a model specification: the record type and
//! its opaque function handles ([`spec`]), the per-parameter interval pair
//! ([`bounds`]), the slice-width table and transform-key resolver
//! ([`widths`]), and the registration-time invariant pass ([`validation`]).
//! The registry layer above composes these; downstream consumers read them
//! through the records a registry hands out.
//!
//! Conventions
//! -----------
//! - Everything here is pure data and pure functions: no I/O, no logging,
//!   no global state. Global state lives in `models::registry` alone.
//! - All per-parameter sequences are positionally aligned with the owning
//!   record's `params`; validation enforces the alignment before a record
//!   becomes visible through a registry.
pub mod bounds;
pub mod spec;
pub mod validation;
pub mod widths;

pub use bounds::ParamBounds;
pub use spec::{BoundaryRef, DriftRef, ModelSpec, ModelSpecBuilder};
pub use widths::{SliceKeys, SliceWidths};

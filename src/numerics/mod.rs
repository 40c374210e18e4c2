//! numerics — numerical helpers shared with downstream samplers.
//!
//! Currently the bounded-transform pair in [`transformations`], which gives
//! the `params_trans` flags of the model specifications their concrete
//! meaning.
pub mod transformations;

//! Builtin catalog — the fixed literal table of model specifications.
//!
//! Purpose
//! -------
//! Enumerate the shipped sequential-sampling model family: the classic DDM
//! parameterizations, collapsing-bound variants (angle, Weibull-CDF),
//! Lévy-flight and Ornstein accumulators, time-varying-drift variants, the
//! parallel/sequential/mixture two-stage DDM families, and the race and
//! leaky-competing-accumulator models. Entries are pure data; every record
//! passes the full invariant pass when [`builtin_registry`] registers it.
//!
//! Conventions
//! -----------
//! - One function per model, returning the assembled (not yet validated)
//!   record; [`builtin_registry`] is the single place that registers and
//!   thereby validates them.
//! - Two additional identifiers are registered as independently-owned
//!   aliases: `weibull_cdf` (of `weibull`) and `full_ddm2` (of `full_ddm`).
//!   Full deep copies, so neither name can mutate state visible through the
//!   other.
use crate::models::core::spec::{BoundaryRef, ModelSpec};
use crate::models::errors::{RegistryResult, SpecResult};
use crate::models::registry::Registry;

/// Build a fresh registry holding every builtin entry plus the two aliases.
///
/// Errors
/// ------
/// Propagates the first registration failure. With the shipped table this
/// never fires; the typed path exists so a future edit to the literal data
/// is caught at load time, naming the broken entry and invariant.
pub fn builtin_registry() -> RegistryResult<Registry> {
    let registry = Registry::new();
    for build in BUILTIN_ENTRIES {
        registry.register(build()?)?;
    }
    registry.alias("weibull", "weibull_cdf", true)?;
    registry.alias("full_ddm", "full_ddm2", true)?;
    Ok(registry)
}

/// Builders for every primary (non-alias) builtin entry, in catalog order.
const BUILTIN_ENTRIES: &[fn() -> SpecResult<ModelSpec>] = &[
    ddm_vanilla,
    full_ddm_vanilla,
    ddm,
    angle,
    weibull,
    levy,
    full_ddm,
    ornstein,
    ddm_sdv,
    gamma_drift,
    gamma_drift_angle,
    ddm_par2,
    ddm_par2_no_bias,
    ddm_par2_angle_no_bias,
    ddm_par2_weibull_no_bias,
    ddm_seq2,
    ddm_seq2_no_bias,
    ddm_seq2_angle_no_bias,
    ddm_seq2_weibull_no_bias,
    ddm_mic2_adj,
    ddm_mic2_adj_no_bias,
    ddm_mic2_adj_angle_no_bias,
    ddm_mic2_adj_weibull_no_bias,
    race_no_bias_3,
    race_no_bias_angle_3,
    race_no_bias_4,
    race_no_bias_angle_4,
    lca_no_bias_3,
    lca_no_bias_angle_3,
    lca_no_bias_4,
    lca_no_bias_angle_4,
];

fn ddm_vanilla() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_vanilla")
        .doc("Simulation-convention DDM (boundaries coded 0..a); intended for synthetic-data \
              generation, not amortized-likelihood fitting.")
        .params(&["v", "a", "z", "t"])
        .trans(&[false, false, true, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0)])
        .bounds(&[-5.0, 0.1, 0.05, 0.0], &[5.0, 5.0, 0.95, 3.0])
        .defaults(&[0.0, 2.0, 0.5, 0.0])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["z"])
        .choices(&[0, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 1.0),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn full_ddm_vanilla() -> SpecResult<ModelSpec> {
    ModelSpec::builder("full_ddm_vanilla")
        .doc("Simulation-convention full DDM with inter-trial variability in starting point, \
              drift, and non-decision time.")
        .params(&["v", "a", "z", "t", "sz", "sv", "st"])
        .trans(&[false, false, true, false, false, false, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0), Some(0.1), Some(0.5), Some(0.1)])
        .bounds(&[-5.0, 0.1, 0.3, 0.25, 0.0, 0.0, 0.0], &[5.0, 5.0, 0.7, 2.25, 0.25, 4.0, 0.25])
        .defaults(&[0.0, 1.0, 0.5, 0.25, 0.0, 0.0, 0.0])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["z", "st", "sv", "sz"])
        .choices(&[0, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 1.0),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("sz", 1.1),
            ("st", 0.1),
            ("sv", 0.5),
        ])
        .build()
}

fn ddm() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm")
        .doc("Basic DDM with boundaries coded as -a and a; boundary separation is half the \
              0..a convention, so multiply a by 2 when comparing fits across conventions.")
        .params(&["v", "a", "z", "t"])
        .trans(&[false, false, true, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0)])
        .bounds(&[-3.0, 0.3, 0.1, 1e-3], &[3.0, 2.5, 0.9, 2.0])
        .defaults(&[0.0, 1.0, 0.5, 1e-3])
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
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn angle() -> SpecResult<ModelSpec> {
    ModelSpec::builder("angle")
        .doc("DDM with a linearly collapsing decision boundary; theta is the collapse angle.")
        .params(&["v", "a", "z", "t", "theta"])
        .trans(&[false, false, true, false, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0), Some(1.0)])
        .bounds(&[-3.0, 0.3, 0.1, 1e-3, -0.1], &[3.0, 3.0, 0.9, 2.0, 1.3])
        .defaults(&[0.0, 1.0, 0.5, 1e-3, 0.1])
        .boundary(BoundaryRef::Angle)
        .hddm_include(&["z", "theta"])
        .choices(&[-1, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 1.0),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("theta", 0.1),
            ("theta_std", 0.2),
        ])
        .build()
}

fn weibull() -> SpecResult<ModelSpec> {
    ModelSpec::builder("weibull")
        .doc("DDM with a Weibull-CDF-shaped collapsing boundary parameterized by alpha and \
              beta.")
        .params(&["v", "a", "z", "t", "alpha", "beta"])
        .trans(&[false, false, true, false, false, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0), Some(2.0), Some(2.0)])
        .bounds(&[-2.5, 0.3, 0.2, 1e-3, 0.31, 0.31], &[2.5, 2.5, 0.8, 2.0, 4.99, 6.99])
        .defaults(&[0.0, 1.0, 0.5, 1e-3, 3.0, 3.0])
        .boundary(BoundaryRef::WeibullCdf)
        .hddm_include(&["z", "alpha", "beta"])
        .choices(&[-1, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 1.0),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("alpha", 1.0),
            ("alpha_std", 0.5),
            ("beta", 1.0),
            ("beta_std", 0.5),
        ])
        .build()
}

fn levy() -> SpecResult<ModelSpec> {
    ModelSpec::builder("levy")
        .doc("Accumulator driven by alpha-stable (Levy-flight) noise; alpha is the stability \
              exponent.")
        .params(&["v", "a", "z", "alpha", "t"])
        .trans(&[false, false, true, false, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0), Some(1.0)])
        .bounds(&[-3.0, 0.3, 0.1, 1.0, 1e-3], &[3.0, 2.0, 0.9, 2.0, 2.0])
        .defaults(&[0.0, 1.0, 0.5, 1.5, 1e-3])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["z", "alpha"])
        .choices(&[-1, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 1.0),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("alpha", 1.0),
            ("alpha_std", 0.5),
        ])
        .build()
}

fn full_ddm() -> SpecResult<ModelSpec> {
    ModelSpec::builder("full_ddm")
        .doc("Full DDM with inter-trial variability in starting point (sz), drift (sv), and \
              non-decision time (st); boundaries coded as -a and a.")
        .params(&["v", "a", "z", "t", "sz", "sv", "st"])
        .trans(&[false, false, true, false, false, false, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0), Some(0.1), Some(0.5), Some(0.1)])
        .bounds(&[-3.0, 0.3, 0.3, 0.25, 1e-3, 1e-3, 1e-3], &[3.0, 2.5, 0.7, 2.25, 0.2, 2.0, 0.25])
        .defaults(&[0.0, 1.0, 0.5, 0.25, 1e-3, 1e-3, 1e-3])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["z", "st", "sv", "sz"])
        .choices(&[-1, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 1.0),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("sz", 1.1),
            ("st", 0.1),
            ("sv", 0.5),
        ])
        .build()
}

fn ornstein() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ornstein")
        .doc("Ornstein-Uhlenbeck accumulator; g is the leak/attraction coefficient.")
        .params(&["v", "a", "z", "g", "t"])
        .trans(&[false, false, true, false, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0), Some(1.0)])
        .bounds(&[-2.0, 0.3, 0.2, -1.0, 1e-3], &[2.0, 2.0, 0.8, 1.0, 2.0])
        .defaults(&[0.0, 1.0, 0.5, 0.0, 1e-3])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["z", "g"])
        .choices(&[-1, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 0.1),
            ("a", 1.0),
            ("a_std", 0.1),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("g", 0.1),
            ("g_trans", 0.2),
            ("g_std", 0.1),
        ])
        .build()
}

fn ddm_sdv() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_sdv")
        .doc("DDM with inter-trial drift variability (sv) only.")
        .params(&["v", "a", "z", "t", "sv"])
        .trans(&[false, false, true, false, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0), Some(1.0)])
        .bounds(&[-3.0, 0.3, 0.1, 1e-3, 1e-3], &[3.0, 2.5, 0.9, 2.0, 2.5])
        .defaults(&[0.0, 1.0, 0.5, 1e-3, 1e-3])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["z", "sv"])
        .choices(&[-1, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 1.0),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("sv", 0.5),
        ])
        .build()
}

fn gamma_drift() -> SpecResult<ModelSpec> {
    ModelSpec::builder("gamma_drift")
        .doc("DDM whose drift follows a gamma-shaped time course (shape, scale) scaled by c.")
        .params(&["v", "a", "z", "t", "shape", "scale", "c"])
        .trans(&[false, false, true, false, false, false, false])
        .std_upper(&[Some(1.5), Some(1.0), None, Some(1.0), Some(2.0), Some(2.0), Some(1.5)])
        .bounds(&[-3.0, 0.3, 0.1, 1e-3, 2.0, 0.01, -3.0], &[3.0, 3.0, 0.9, 2.0, 10.0, 1.0, 3.0])
        .defaults(&[0.0, 1.0, 0.5, 0.25, 5.0, 0.5, 1.0])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["z", "shape", "scale", "c"])
        .choices(&[-1, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 1.0),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("shape", 1.0),
            ("shape_std", 1.0),
            ("scale", 1.0),
            ("scale_std", 1.0),
            ("c", 1.0),
            ("c_std", 1.0),
        ])
        .build()
}

fn gamma_drift_angle() -> SpecResult<ModelSpec> {
    ModelSpec::builder("gamma_drift_angle")
        .doc("Gamma-shaped drift time course combined with a linearly collapsing boundary.")
        .params(&["v", "a", "z", "t", "theta", "shape", "scale", "c"])
        .trans(&[false, false, true, false, false, false, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.0),
            None,
            Some(1.0),
            Some(1.0),
            Some(2.0),
            Some(2.0),
            Some(1.5),
        ])
        .bounds(&[-3.0, 0.3, 0.1, 1e-3, -0.1, 2.0, 0.01, -3.0], &[
            3.0, 3.0, 0.9, 2.0, 1.3, 10.0, 1.0, 3.0,
        ])
        .defaults(&[0.0, 1.0, 0.5, 0.25, 0.0, 5.0, 0.5, 1.0])
        .boundary(BoundaryRef::Angle)
        .hddm_include(&["z", "shape", "scale", "c", "theta"])
        .choices(&[-1, 1])
        .slice_widths(&[
            ("v", 1.5),
            ("v_std", 1.0),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("theta", 0.1),
            ("theta_std", 0.2),
            ("shape", 1.0),
            ("shape_std", 1.0),
            ("scale", 1.0),
            ("scale_std", 1.0),
            ("c", 1.0),
            ("c_std", 1.0),
        ])
        .build()
}

fn ddm_par2() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_par2")
        .doc("Two-stage parallel DDM over four compound choices, with high/low drift and \
              starting-point pairs.")
        .params(&["vh", "vl1", "vl2", "a", "zh", "zl1", "zl2", "t"])
        .trans(&[false, false, false, false, true, true, true, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.0), None, None, None, Some(1.0)])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.2, 0.2, 0.2, 0.0], &[
            2.5, 2.5, 2.5, 2.0, 0.8, 0.8, 0.8, 2.0,
        ])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 0.5, 0.5, 0.5, 1.0])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["vh", "vl1", "vl2", "a", "zh", "zl1", "zl2", "t"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("zh", 0.1),
            ("zh_trans", 0.2),
            ("zl1", 0.1),
            ("zl1_trans", 0.2),
            ("zl2", 0.1),
            ("zl2_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn ddm_par2_no_bias() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_par2_no_bias")
        .doc("Two-stage parallel DDM without starting-point bias parameters.")
        .params(&["vh", "vl1", "vl2", "a", "t"])
        .trans(&[false, false, false, false, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.0), Some(1.0)])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.0], &[2.5, 2.5, 2.5, 2.0, 2.0])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 1.0])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["vh", "vl1", "vl2", "a", "t"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn ddm_par2_angle_no_bias() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_par2_angle_no_bias")
        .doc("Two-stage parallel DDM, no bias, with an additively combined collapsing \
              boundary.")
        .params(&["vh", "vl1", "vl2", "a", "t", "theta"])
        .trans(&[false, false, false, false, false, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.0), Some(1.0), Some(1.0)])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.0, -0.1], &[2.5, 2.5, 2.5, 2.0, 2.0, 1.0])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0])
        .boundary(BoundaryRef::Angle)
        .boundary_multiplicative(false)
        .hddm_include(&["vh", "vl1", "vl2", "a", "t", "theta"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("t", 0.01),
            ("t_std", 0.15),
            ("theta", 0.1),
            ("theta_std", 0.2),
        ])
        .build()
}

fn ddm_par2_weibull_no_bias() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_par2_weibull_no_bias")
        .doc("Two-stage parallel DDM, no bias, with a Weibull-CDF collapsing boundary.")
        .params(&["vh", "vl1", "vl2", "a", "t", "alpha", "beta"])
        .trans(&[false, false, false, false, false, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            Some(1.0),
            Some(1.5),
            Some(1.5),
        ])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.0, 0.31, 0.31], &[2.5, 2.5, 2.5, 2.0, 2.0, 4.99, 6.99])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 1.0, 2.5, 3.5])
        .boundary(BoundaryRef::WeibullCdf)
        .boundary_multiplicative(true)
        .hddm_include(&["vh", "vl1", "vl2", "a", "t", "alpha", "beta"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("t", 0.01),
            ("t_std", 0.15),
            ("theta", 0.1),
            ("theta_std", 0.2),
            ("alpha", 1.0),
            ("alpha_std", 0.5),
            ("beta", 1.0),
            ("beta_std", 0.5),
        ])
        .build()
}

fn ddm_seq2() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_seq2")
        .doc("Two-stage sequential DDM over four compound choices.")
        .params(&["vh", "vl1", "vl2", "a", "zh", "zl1", "zl2", "t"])
        .trans(&[false, false, false, false, true, true, true, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.0), None, None, None, Some(1.0)])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.2, 0.2, 0.2, 0.0], &[
            2.5, 2.5, 2.5, 2.0, 0.8, 0.8, 0.8, 2.0,
        ])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 0.5, 0.5, 0.5, 1.0])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["vh", "vl1", "vl2", "a", "zh", "zl1", "zl2", "t"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("zh", 0.1),
            ("zh_trans", 0.2),
            ("zl1", 0.1),
            ("zl1_trans", 0.2),
            ("zl2", 0.1),
            ("zl2_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn ddm_seq2_no_bias() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_seq2_no_bias")
        .doc("Two-stage sequential DDM without starting-point bias parameters.")
        .params(&["vh", "vl1", "vl2", "a", "t"])
        .trans(&[false, false, false, false, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.0), Some(1.0)])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.0], &[2.5, 2.5, 2.5, 2.0, 2.0])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 1.0])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["vh", "vl1", "vl2", "a", "t"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn ddm_seq2_angle_no_bias() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_seq2_angle_no_bias")
        .doc("Two-stage sequential DDM, no bias, with an additively combined collapsing \
              boundary.")
        .params(&["vh", "vl1", "vl2", "a", "t", "theta"])
        .trans(&[false, false, false, false, false, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.0), Some(1.0), Some(1.0)])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.0, -0.1], &[2.5, 2.5, 2.5, 2.0, 2.0, 1.0])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0])
        .boundary(BoundaryRef::Angle)
        .boundary_multiplicative(false)
        .hddm_include(&["vh", "vl1", "vl2", "a", "t", "theta"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("t", 0.01),
            ("t_std", 0.15),
            ("theta", 0.1),
            ("theta_std", 0.2),
        ])
        .build()
}

fn ddm_seq2_weibull_no_bias() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_seq2_weibull_no_bias")
        .doc("Two-stage sequential DDM, no bias, with a Weibull-CDF collapsing boundary.")
        .params(&["vh", "vl1", "vl2", "a", "t", "alpha", "beta"])
        .trans(&[false, false, false, false, false, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            Some(1.0),
            Some(1.5),
            Some(1.5),
        ])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.0, 0.31, 0.31], &[2.5, 2.5, 2.5, 2.0, 2.0, 4.99, 6.99])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 1.0, 2.5, 3.5])
        .boundary(BoundaryRef::WeibullCdf)
        .boundary_multiplicative(true)
        .hddm_include(&["vh", "vl1", "vl2", "a", "t", "alpha", "beta"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("t", 0.01),
            ("t_std", 0.15),
            ("alpha", 1.0),
            ("alpha_std", 0.5),
            ("beta", 1.0),
            ("beta_std", 0.5),
        ])
        .build()
}

fn ddm_mic2_adj() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_mic2_adj")
        .doc("Two-stage mixture DDM with an adjustment parameter d mixing the stage \
              contributions.")
        .params(&["vh", "vl1", "vl2", "a", "zh", "zl1", "zl2", "d", "t"])
        .trans(&[false, false, false, false, true, true, true, true, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            None,
            None,
            None,
            None,
            Some(1.0),
        ])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.2, 0.2, 0.2, 0.0, 0.0], &[
            2.5, 2.5, 2.5, 2.0, 0.8, 0.8, 0.8, 1.0, 2.0,
        ])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 0.5, 0.5, 0.5, 0.5, 0.5])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["vh", "vl1", "vl2", "a", "zh", "zl1", "zl2", "d", "t"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("zh", 0.1),
            ("zh_trans", 0.2),
            ("zl1", 0.1),
            ("zl1_trans", 0.2),
            ("zl2", 0.1),
            ("zl2_trans", 0.2),
            ("d", 0.1),
            ("d_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn ddm_mic2_adj_no_bias() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_mic2_adj_no_bias")
        .doc("Two-stage mixture DDM, no starting-point bias, with adjustment parameter d.")
        .params(&["vh", "vl1", "vl2", "a", "d", "t"])
        .trans(&[false, false, false, false, false, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.0), Some(1.0), Some(1.0)])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.0, 0.0], &[2.5, 2.5, 2.5, 2.0, 1.0, 2.0])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 0.5, 1.0])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["vh", "vl1", "vl2", "a", "d", "t"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("d", 0.1),
            ("d_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn ddm_mic2_adj_angle_no_bias() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_mic2_adj_angle_no_bias")
        .doc("Two-stage mixture DDM, no bias, with an additively combined collapsing \
              boundary.")
        .params(&["vh", "vl1", "vl2", "a", "d", "t", "theta"])
        .trans(&[false, false, false, false, false, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            Some(1.0),
            Some(1.0),
            Some(1.0),
        ])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.0, 0.0, -0.1], &[2.5, 2.5, 2.5, 2.0, 1.0, 2.0, 1.0])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 0.5, 1.0, 0.0])
        .boundary(BoundaryRef::Angle)
        .boundary_multiplicative(false)
        .hddm_include(&["vh", "vl1", "vl2", "a", "d", "t", "theta"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("d", 0.1),
            ("d_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("theta", 0.1),
            ("theta_std", 0.2),
        ])
        .build()
}

fn ddm_mic2_adj_weibull_no_bias() -> SpecResult<ModelSpec> {
    ModelSpec::builder("ddm_mic2_adj_weibull_no_bias")
        .doc("Two-stage mixture DDM, no bias, with a Weibull-CDF collapsing boundary.")
        .params(&["vh", "vl1", "vl2", "a", "d", "t", "alpha", "beta"])
        .trans(&[false, false, false, false, false, false, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            Some(1.0),
            Some(1.0),
            Some(1.5),
            Some(1.5),
        ])
        .bounds(&[-2.5, -2.5, -2.5, 0.3, 0.0, 0.0, 0.31, 0.31], &[
            2.5, 2.5, 2.5, 2.0, 1.0, 2.0, 4.99, 6.99,
        ])
        .defaults(&[0.0, 0.0, 0.0, 1.0, 0.5, 1.0, 2.5, 3.5])
        .boundary(BoundaryRef::WeibullCdf)
        .boundary_multiplicative(true)
        .hddm_include(&["vh", "vl1", "vl2", "a", "d", "t", "alpha", "beta"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("vh", 1.5),
            ("vh_std", 0.5),
            ("vl1", 1.5),
            ("vl1_std", 0.5),
            ("vl2", 1.5),
            ("vl2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("d", 0.1),
            ("d_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("alpha", 1.0),
            ("alpha_std", 0.5),
            ("beta", 1.0),
            ("beta_std", 0.5),
        ])
        .build()
}

fn race_no_bias_3() -> SpecResult<ModelSpec> {
    ModelSpec::builder("race_no_bias_3")
        .doc("Three-accumulator race model; z is largely redundant with boundary separation \
              and is usually fixed.")
        .params(&["v0", "v1", "v2", "a", "z", "t"])
        .trans(&[false, false, false, false, true, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.0), None, Some(1.0)])
        .bounds(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &[2.5, 2.5, 2.5, 3.0, 0.9, 2.0])
        .defaults(&[0.0, 0.0, 0.0, 2.0, 0.5, 1e-3])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["v0", "v1", "v2", "a", "z", "t"])
        .choices(&[0, 1, 2])
        .slice_widths(&[
            ("v0", 1.5),
            ("v0_std", 0.5),
            ("v1", 1.5),
            ("v1_std", 0.5),
            ("v2", 1.5),
            ("v2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn race_no_bias_angle_3() -> SpecResult<ModelSpec> {
    ModelSpec::builder("race_no_bias_angle_3")
        .doc("Three-accumulator race model with a linearly collapsing boundary.")
        .params(&["v0", "v1", "v2", "a", "z", "t", "theta"])
        .trans(&[false, false, false, false, true, false, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.0), None, Some(1.0), Some(1.0)])
        .bounds(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -0.1], &[2.5, 2.5, 2.5, 3.0, 0.9, 2.0, 1.45])
        .defaults(&[0.0, 0.0, 0.0, 2.0, 0.5, 1e-3, 0.0])
        .boundary(BoundaryRef::Angle)
        .hddm_include(&["v0", "v1", "v2", "a", "z", "t", "theta"])
        .choices(&[0, 1, 2])
        .slice_widths(&[
            ("v0", 1.5),
            ("v0_std", 0.5),
            ("v1", 1.5),
            ("v1_std", 0.5),
            ("v2", 1.5),
            ("v2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("theta", 0.1),
            ("theta_std", 0.2),
        ])
        .build()
}

fn race_no_bias_4() -> SpecResult<ModelSpec> {
    ModelSpec::builder("race_no_bias_4")
        .doc("Four-accumulator race model; z is largely redundant with boundary separation \
              and is usually fixed.")
        .params(&["v0", "v1", "v2", "v3", "a", "z", "t"])
        .trans(&[false, false, false, false, false, true, false])
        .std_upper(&[Some(1.5), Some(1.5), Some(1.5), Some(1.5), Some(1.0), None, Some(1.0)])
        .bounds(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &[2.5, 2.5, 2.5, 2.5, 3.0, 0.9, 2.0])
        .defaults(&[0.0, 0.0, 0.0, 0.0, 2.0, 0.5, 1e-3])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["v0", "v1", "v2", "v3", "a", "z", "t"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("v0", 1.5),
            ("v0_std", 0.5),
            ("v1", 1.5),
            ("v1_std", 0.5),
            ("v2", 1.5),
            ("v2_std", 0.5),
            ("v3", 1.5),
            ("v3_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
        ])
        .build()
}

fn race_no_bias_angle_4() -> SpecResult<ModelSpec> {
    ModelSpec::builder("race_no_bias_angle_4")
        .doc("Four-accumulator race model with a linearly collapsing boundary.")
        .params(&["v0", "v1", "v2", "v3", "a", "z", "t", "theta"])
        .trans(&[false, false, false, false, false, true, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            None,
            Some(1.0),
            Some(1.0),
        ])
        .bounds(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -0.1], &[
            2.5, 2.5, 2.5, 2.5, 3.0, 0.9, 2.0, 1.45,
        ])
        .defaults(&[0.0, 0.0, 0.0, 0.0, 2.0, 0.5, 1e-3, 0.0])
        .boundary(BoundaryRef::Angle)
        .hddm_include(&["v0", "v1", "v2", "v3", "a", "z", "t", "theta"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("v0", 1.5),
            ("v0_std", 0.5),
            ("v1", 1.5),
            ("v1_std", 0.5),
            ("v2", 1.5),
            ("v2_std", 0.5),
            ("v3", 1.5),
            ("v3_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("theta", 0.1),
            ("theta_std", 0.2),
        ])
        .build()
}

fn lca_no_bias_3() -> SpecResult<ModelSpec> {
    ModelSpec::builder("lca_no_bias_3")
        .doc("Three-choice leaky competing accumulator; g is the leak, b the lateral \
              inhibition.")
        .params(&["v0", "v1", "v2", "a", "z", "g", "b", "t"])
        .trans(&[false, false, false, false, true, false, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            None,
            Some(1.0),
            Some(1.0),
            Some(1.0),
        ])
        .bounds(&[0.0, 0.0, 0.0, 1.0, 0.0, -1.0, -1.0, 0.0], &[
            2.5, 2.5, 2.5, 3.0, 0.9, 1.0, 1.0, 2.0,
        ])
        .defaults(&[0.0, 0.0, 0.0, 2.0, 0.5, 0.0, 0.0, 1e-3])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["v0", "v1", "v2", "a", "z", "g", "b", "t"])
        .choices(&[0, 1, 2])
        .slice_widths(&[
            ("v0", 1.5),
            ("v0_std", 0.5),
            ("v1", 1.5),
            ("v1_std", 0.5),
            ("v2", 1.5),
            ("v2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("g", 0.1),
            ("g_std", 0.2),
            ("b", 0.1),
            ("b_std", 0.2),
        ])
        .build()
}

fn lca_no_bias_angle_3() -> SpecResult<ModelSpec> {
    ModelSpec::builder("lca_no_bias_angle_3")
        .doc("Three-choice leaky competing accumulator with a linearly collapsing boundary.")
        .params(&["v0", "v1", "v2", "a", "z", "g", "b", "t", "theta"])
        .trans(&[false, false, false, false, true, false, false, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            None,
            Some(1.5),
            Some(1.0),
            Some(1.0),
            Some(1.0),
        ])
        .bounds(&[0.0, 0.0, 0.0, 1.0, 0.0, -1.0, -1.0, 0.0, -1.0], &[
            2.5, 2.5, 2.5, 3.0, 0.9, 1.0, 1.0, 2.0, 1.45,
        ])
        .defaults(&[0.0, 0.0, 0.0, 2.0, 0.5, 0.0, 0.0, 1e-3, 0.0])
        .boundary(BoundaryRef::Angle)
        .hddm_include(&["v0", "v1", "v2", "a", "z", "g", "b", "t", "theta"])
        .choices(&[0, 1, 2])
        .slice_widths(&[
            ("v0", 1.5),
            ("v0_std", 0.5),
            ("v1", 1.5),
            ("v1_std", 0.5),
            ("v2", 1.5),
            ("v2_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("g", 0.1),
            ("g_std", 0.2),
            ("b", 0.1),
            ("b_std", 0.2),
            ("theta", 0.1),
            ("theta_std", 0.2),
        ])
        .build()
}

fn lca_no_bias_4() -> SpecResult<ModelSpec> {
    ModelSpec::builder("lca_no_bias_4")
        .doc("Four-choice leaky competing accumulator; g is the leak, b the lateral \
              inhibition.")
        .params(&["v0", "v1", "v2", "v3", "a", "z", "g", "b", "t"])
        .trans(&[false, false, false, false, false, true, false, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            None,
            Some(1.5),
            Some(1.0),
            Some(1.0),
        ])
        .bounds(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, -1.0, 0.0], &[
            2.5, 2.5, 2.5, 2.5, 3.0, 0.9, 1.0, 1.0, 2.0,
        ])
        .defaults(&[0.0, 0.0, 0.0, 0.0, 2.0, 0.5, 0.0, 0.0, 1e-3])
        .boundary(BoundaryRef::Constant)
        .hddm_include(&["v0", "v1", "v2", "v3", "a", "z", "g", "b", "t"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("v0", 1.5),
            ("v0_std", 0.5),
            ("v1", 1.5),
            ("v1_std", 0.5),
            ("v2", 1.5),
            ("v2_std", 0.5),
            ("v3", 1.5),
            ("v3_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("g", 0.1),
            ("g_std", 0.2),
            ("b", 0.1),
            ("b_std", 0.2),
        ])
        .build()
}

fn lca_no_bias_angle_4() -> SpecResult<ModelSpec> {
    ModelSpec::builder("lca_no_bias_angle_4")
        .doc("Four-choice leaky competing accumulator with a linearly collapsing boundary.")
        .params(&["v0", "v1", "v2", "v3", "a", "z", "g", "b", "t", "theta"])
        .trans(&[false, false, false, false, false, true, false, false, false, false])
        .std_upper(&[
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.5),
            Some(1.0),
            None,
            Some(1.5),
            Some(1.0),
            Some(1.0),
            Some(1.0),
        ])
        .bounds(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, -1.0, 0.0, -0.1], &[
            2.5, 2.5, 2.5, 2.5, 3.0, 0.9, 1.0, 1.0, 2.0, 1.45,
        ])
        .defaults(&[0.0, 0.0, 0.0, 0.0, 2.0, 0.5, 0.0, 0.0, 1e-3, 0.0])
        .boundary(BoundaryRef::Angle)
        .hddm_include(&["v0", "v1", "v2", "v3", "a", "z", "g", "b", "t", "theta"])
        .choices(&[0, 1, 2, 3])
        .slice_widths(&[
            ("v0", 1.5),
            ("v0_std", 0.5),
            ("v1", 1.5),
            ("v1_std", 0.5),
            ("v2", 1.5),
            ("v2_std", 0.5),
            ("v3", 1.5),
            ("v3_std", 0.5),
            ("a", 1.0),
            ("a_std", 1.0),
            ("z", 0.1),
            ("z_trans", 0.2),
            ("t", 0.01),
            ("t_std", 0.15),
            ("g", 0.1),
            ("g_std", 0.2),
            ("b", 0.1),
            ("b_std", 0.2),
            ("theta", 0.1),
            ("theta_std", 0.2),
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::spec::BoundaryRef;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - That the builtin table loads and every entry passes validation.
    // - Spot checks of individual entries against their intended values
    //   (boundary handles, combination mode, choice sets, trans flags).
    //
    // They intentionally DO NOT cover:
    // - Registry operation semantics (see `models::registry` tests).
    // - The full cross-entry invariant sweep (integration suite).
    // -------------------------------------------------------------------------

    #[test]
    fn builtin_table_loads_with_all_identifiers() {
        let registry = builtin_registry().expect("builtin table must validate");

        // 31 primary entries + 2 aliases.
        assert_eq!(registry.len(), 33);
        let identifiers = registry.list_identifiers();
        assert_eq!(identifiers.first().map(String::as_str), Some("ddm_vanilla"));
        assert!(identifiers.contains(&"ddm".to_string()));
        assert!(identifiers.contains(&"lca_no_bias_angle_4".to_string()));
        // Aliases come last, in registration order.
        assert_eq!(identifiers[31], "weibull_cdf");
        assert_eq!(identifiers[32], "full_ddm2");
    }

    #[test]
    fn ddm_entry_matches_literal_values() {
        let registry = builtin_registry().expect("builtin table must validate");
        let ddm = registry.get("ddm").expect("ddm is registered");

        assert_eq!(ddm.params, vec!["v", "a", "z", "t"]);
        assert_eq!(ddm.params_trans, vec![false, false, true, false]);
        assert_eq!(ddm.choices, vec![-1, 1]);
        assert_eq!(ddm.boundary, BoundaryRef::Constant);
        assert!(ddm.boundary_multiplicative);
        assert_eq!(ddm.bounds_of("t"), Some((1e-3, 2.0)));
        assert_eq!(ddm.default_of("a"), Some(1.0));
        assert_eq!(ddm.params_std_upper[2], None);
    }

    #[test]
    fn angle_no_bias_variants_combine_boundary_additively() {
        let registry = builtin_registry().expect("builtin table must validate");

        for name in ["ddm_par2_angle_no_bias", "ddm_seq2_angle_no_bias", "ddm_mic2_adj_angle_no_bias"]
        {
            let spec = registry.get(name).expect("entry is registered");
            assert_eq!(spec.boundary, BoundaryRef::Angle);
            assert!(!spec.boundary_multiplicative, "{name} should combine additively");
        }

        // The race/LCA angle variants keep the multiplicative default.
        let race = registry.get("race_no_bias_angle_3").expect("entry is registered");
        assert!(race.boundary_multiplicative);
    }

    #[test]
    fn ornstein_slice_widths_resolve_all_g_keys() {
        let registry = builtin_registry().expect("builtin table must validate");
        let ornstein = registry.get("ornstein").expect("ornstein is registered");

        assert_eq!(ornstein.slice_widths.get("g"), Some(0.1));
        assert_eq!(ornstein.slice_widths.get("g_trans"), Some(0.2));
        assert_eq!(ornstein.slice_widths.get("g_std"), Some(0.1));
        assert!(ornstein.is_hierarchical("g"));
        assert!(!ornstein.is_transformed("g"));
    }

    #[test]
    fn multi_choice_entries_expose_their_choice_sets() {
        let registry = builtin_registry().expect("builtin table must validate");

        assert_eq!(registry.get("lca_no_bias_4").unwrap().choices, vec![0, 1, 2, 3]);
        assert_eq!(registry.get("race_no_bias_3").unwrap().choices, vec![0, 1, 2]);
        assert_eq!(registry.get("ddm_vanilla").unwrap().choices, vec![0, 1]);
    }

    #[test]
    // Purpose
    // -------
    // The two catalog aliases are independent deep copies: identical
    // parameter space, distinct instances, own names.
    fn catalog_aliases_are_independent_copies() {
        let registry = builtin_registry().expect("builtin table must validate");

        let weibull = registry.get("weibull").expect("weibull is registered");
        let weibull_cdf = registry.get("weibull_cdf").expect("alias is registered");
        assert!(!std::sync::Arc::ptr_eq(&weibull, &weibull_cdf));
        assert_eq!(weibull_cdf.name, "weibull_cdf");
        assert_eq!(weibull.params, weibull_cdf.params);
        assert_eq!(weibull.param_bounds, weibull_cdf.param_bounds);
        assert_eq!(weibull.params_default, weibull_cdf.params_default);
        assert_eq!(weibull.slice_widths, weibull_cdf.slice_widths);

        let full_ddm = registry.get("full_ddm").expect("full_ddm is registered");
        let full_ddm2 = registry.get("full_ddm2").expect("alias is registered");
        assert_eq!(full_ddm.params, full_ddm2.params);
        assert_eq!(full_ddm.hddm_include, full_ddm2.hddm_include);
    }
}

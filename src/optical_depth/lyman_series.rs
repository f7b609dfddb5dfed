//! Lyman-series (discrete line) optical depth of the LAF and DLA absorbers.
//!
//! For each transition `j`, an absorber can only contribute when the observed wavelength
//! falls strictly between the rest-frame line and the line redshifted to the source,
//! `λ_j < λ_obs < λ_j (1 + z_S)`. The contribution is a power law in `λ_obs / λ_j` whose
//! coefficient and exponent depend on the absorber-redshift regime `λ_obs / λ_j - 1`.
use crate::{
    coefficients::{CoefficientTable, TransitionRecord},
    constants::{
        Angstrom, Redshift, Tau, DLA_LS_EXPONENTS, LAF_LS_EXPONENTS, Z1_DLA, Z1_LAF, Z2_LAF,
    },
};

#[inline]
fn in_absorption_range(z_source: Redshift, lambda_obs: Angstrom, lambda_rest: Angstrom) -> bool {
    lambda_obs < lambda_rest * (1. + z_source) && lambda_obs > lambda_rest
}

#[inline]
fn laf_term(lambda_obs: Angstrom, t: &TransitionRecord) -> Tau {
    let ratio = lambda_obs / t.lambda_rest;
    if lambda_obs < t.lambda_rest * (1. + Z1_LAF) {
        t.laf[0] * ratio.powf(LAF_LS_EXPONENTS[0])
    } else if lambda_obs < t.lambda_rest * (1. + Z2_LAF) {
        t.laf[1] * ratio.powf(LAF_LS_EXPONENTS[1])
    } else {
        t.laf[2] * ratio.powf(LAF_LS_EXPONENTS[2])
    }
}

#[inline]
fn dla_term(lambda_obs: Angstrom, t: &TransitionRecord) -> Tau {
    let ratio = lambda_obs / t.lambda_rest;
    if lambda_obs < t.lambda_rest * (1. + Z1_DLA) {
        t.dla[0] * ratio.powf(DLA_LS_EXPONENTS[0])
    } else {
        t.dla[1] * ratio.powf(DLA_LS_EXPONENTS[1])
    }
}

/// Lyman-series optical depth of the Lyman-alpha forest.
///
/// Arguments
/// -----------------
/// * `z_source`: redshift of the source.
/// * `lambda_obs`: observed wavelength in Angstroms.
/// * `table`: per-transition coefficients.
///
/// Return
/// ----------
/// * The summed optical depth over all transitions in range, `0.0` if none is.
pub fn tau_ls_laf(z_source: Redshift, lambda_obs: Angstrom, table: &CoefficientTable) -> Tau {
    table
        .iter()
        .filter(|t| in_absorption_range(z_source, lambda_obs, t.lambda_rest))
        .fold(0.0, |tau, t| tau + laf_term(lambda_obs, t))
}

/// Lyman-series optical depth of the damped Lyman-alpha systems.
///
/// Same range selection as [`tau_ls_laf`], with two redshift regimes split at
/// [`Z1_DLA`](crate::constants::Z1_DLA).
pub fn tau_ls_dla(z_source: Redshift, lambda_obs: Angstrom, table: &CoefficientTable) -> Tau {
    table
        .iter()
        .filter(|t| in_absorption_range(z_source, lambda_obs, t.lambda_rest))
        .fold(0.0, |tau, t| tau + dla_term(lambda_obs, t))
}

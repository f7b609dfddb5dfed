//! # IGM transmission
//!
//! Transmitted fraction `exp(-τ)` of the flux of a source at redshift `z_S`, observed at
//! wavelength `λ_obs`, where `τ` is the total optical depth of
//! [`optical_depth`](crate::optical_depth::optical_depth).
//!
//! Three entry points share the same scalar kernel:
//!
//! - [`transmission`] – one `(z_S, λ_obs)` pair.
//! - [`transmission_array`] – one source redshift, a vector of observed wavelengths.
//! - [`transmission_aligned`] – element-aligned vectors of redshifts and wavelengths.
//!
//! Array evaluation is strictly element-wise: every element goes through [`transmission`]
//! with the full transition table, so the vector results are identical to a loop over
//! scalars.
use nalgebra::DVector;

use crate::{
    coefficients::CoefficientTable,
    constants::{Angstrom, Redshift},
    igm_errors::IgmError,
    optical_depth::optical_depth,
};

/// IGM transmission at a single observed wavelength.
///
/// Arguments
/// -----------------
/// * `z_source`: redshift of the source.
/// * `lambda_obs`: observed wavelength in Angstroms.
/// * `table`: per-transition coefficients.
///
/// Return
/// ----------
/// * The transmitted fraction in `(0, 1]`; exactly `1.0` when no absorption applies.
pub fn transmission(z_source: Redshift, lambda_obs: Angstrom, table: &CoefficientTable) -> f64 {
    optical_depth(z_source, lambda_obs, table).transmission()
}

/// IGM transmission of one source over a vector of observed wavelengths.
pub fn transmission_array(
    z_source: Redshift,
    lambda_obs: &DVector<Angstrom>,
    table: &CoefficientTable,
) -> DVector<f64> {
    lambda_obs.map(|lambda| transmission(z_source, lambda, table))
}

/// IGM transmission for element-aligned vectors of source redshifts and observed wavelengths.
///
/// Return
/// ----------
/// * The element-wise transmission, or [`IgmError::ShapeMismatch`] when the two vectors
///   have different lengths.
pub fn transmission_aligned(
    z_source: &DVector<Redshift>,
    lambda_obs: &DVector<Angstrom>,
    table: &CoefficientTable,
) -> Result<DVector<f64>, IgmError> {
    if z_source.len() != lambda_obs.len() {
        return Err(IgmError::ShapeMismatch {
            expected: z_source.len(),
            found: lambda_obs.len(),
        });
    }

    Ok(z_source.zip_map(lambda_obs, |z, lambda| transmission(z, lambda, table)))
}

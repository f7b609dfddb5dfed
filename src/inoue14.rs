//! # Inoue14: IGM attenuation model handle
//!
//! This module defines [`Inoue14`](crate::inoue14::Inoue14), a small façade owning one
//! [`CoefficientTable`] and exposing every evaluator as a method, so a host program loads
//! the tables once and then only deals with `(z_S, λ_obs)` pairs.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use inoue_igm::inoue14::Inoue14;
//!
//! // Explicit directory
//! let model = Inoue14::from_dir("data/inoue14").unwrap();
//!
//! // Or the directory named by INOUE14_COEFF_DIR
//! let model = Inoue14::from_env().unwrap();
//!
//! let t = model.transmission(3.0, 4500.0);
//! assert!(t > 0.0 && t <= 1.0);
//! ```
//!
//! ## Notes
//!
//! - The table is immutable after construction; an [`Inoue14`] can be shared between threads
//!   (`&Inoue14` is `Send + Sync`) and evaluated concurrently without locking.
//!
//! ## See also
//! ------------
//! * [`load_coefficients`](crate::coefficients::load_coefficients) – Underlying loader.
//! * [`optical_depth`](crate::optical_depth::optical_depth) – Per-component optical depths.
//! * [`transmission`](crate::transmission::transmission) – Free-function form of the combinator.

use std::env::VarError;

use camino::Utf8Path;
use log::debug;
use nalgebra::DVector;

use crate::{
    coefficients::{load_coefficients, CoefficientTable},
    constants::{Angstrom, Redshift, COEFF_DIR_ENV},
    igm_errors::IgmError,
    optical_depth::{optical_depth, OpticalDepth},
    transmission::{transmission, transmission_aligned, transmission_array},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Inoue14 {
    table: CoefficientTable,
}

impl Inoue14 {
    pub fn new(table: CoefficientTable) -> Self {
        Inoue14 { table }
    }

    /// Load the coefficient tables from `dir`.
    pub fn from_dir(dir: impl AsRef<Utf8Path>) -> Result<Self, IgmError> {
        Ok(Inoue14::new(load_coefficients(dir)?))
    }

    /// Load the coefficient tables from the directory named by the `INOUE14_COEFF_DIR`
    /// environment variable.
    ///
    /// Return
    /// ----------
    /// * The model, [`IgmError::MissingCoefficientDir`] if the variable is unset, empty or not
    ///   valid UTF-8, or any loader error.
    pub fn from_env() -> Result<Self, IgmError> {
        let dir = coefficient_dir_from_env(std::env::var(COEFF_DIR_ENV))?;
        debug!("Coefficient directory taken from {COEFF_DIR_ENV}={dir}");
        Inoue14::from_dir(dir.as_str())
    }

    pub fn table(&self) -> &CoefficientTable {
        &self.table
    }

    pub fn optical_depth(&self, z_source: Redshift, lambda_obs: Angstrom) -> OpticalDepth {
        optical_depth(z_source, lambda_obs, &self.table)
    }

    pub fn transmission(&self, z_source: Redshift, lambda_obs: Angstrom) -> f64 {
        transmission(z_source, lambda_obs, &self.table)
    }

    pub fn transmission_array(
        &self,
        z_source: Redshift,
        lambda_obs: &DVector<Angstrom>,
    ) -> DVector<f64> {
        transmission_array(z_source, lambda_obs, &self.table)
    }

    pub fn transmission_aligned(
        &self,
        z_source: &DVector<Redshift>,
        lambda_obs: &DVector<Angstrom>,
    ) -> Result<DVector<f64>, IgmError> {
        transmission_aligned(z_source, lambda_obs, &self.table)
    }
}

/// Validate the value read from `INOUE14_COEFF_DIR`.
fn coefficient_dir_from_env(value: Result<String, VarError>) -> Result<String, IgmError> {
    let dir =
        value.map_err(|e| IgmError::MissingCoefficientDir(format!("{COEFF_DIR_ENV}: {e}")))?;

    if dir.trim().is_empty() {
        return Err(IgmError::MissingCoefficientDir(format!(
            "{COEFF_DIR_ENV} is empty"
        )));
    }
    Ok(dir)
}

impl From<CoefficientTable> for Inoue14 {
    fn from(table: CoefficientTable) -> Self {
        Inoue14::new(table)
    }
}

//! # Constants and type definitions for the Inoue (2014) IGM model
//!
//! This module centralizes the **model parameters** of the analytic prescription
//! of Inoue et al. (2014), the **power-law exponents** of each absorber regime,
//! and the **type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Redshift breakpoints of the Lyman-alpha forest (LAF) and damped Lyman-alpha (DLA)
//!   absorber populations
//! - Rest-frame Lyman-limit wavelength
//! - Names of the coefficient tables and of the environment variable pointing to them
//!
//! These values are part of the published model and are compiled in; they are
//! shared by the Lyman-series and Lyman-continuum evaluators so both always agree
//! on the regime boundaries.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Wavelength in Angstroms
pub type Angstrom = f64;
/// Cosmological redshift (dimensionless)
pub type Redshift = f64;
/// Optical depth τ (dimensionless)
pub type Tau = f64;

// -------------------------------------------------------------------------------------------------
// Model parameters
// -------------------------------------------------------------------------------------------------

/// Redshift breakpoint of the DLA population
pub const Z1_DLA: Redshift = 2.0;

/// First redshift breakpoint of the LAF population
pub const Z1_LAF: Redshift = 1.2;

/// Second redshift breakpoint of the LAF population
pub const Z2_LAF: Redshift = 4.7;

/// Lyman-limit wavelength (rest frame)
pub const LAMBDA_LYMAN_LIMIT: Angstrom = 911.8;

/// Power-law exponents of the LAF Lyman-series term, one per redshift regime
/// (`z < Z1_LAF`, `Z1_LAF <= z < Z2_LAF`, `z >= Z2_LAF`).
pub const LAF_LS_EXPONENTS: [f64; 3] = [1.2, 3.7, 5.5];

/// Power-law exponents of the DLA Lyman-series term (`z < Z1_DLA`, `z >= Z1_DLA`).
pub const DLA_LS_EXPONENTS: [f64; 2] = [2.0, 3.0];

// -------------------------------------------------------------------------------------------------
// Coefficient tables
// -------------------------------------------------------------------------------------------------

/// File name of the LAF coefficient table
pub const LAF_COEFF_FILE: &str = "LAFcoeff.txt";

/// File name of the DLA coefficient table
pub const DLA_COEFF_FILE: &str = "DLAcoeff.txt";

/// Environment variable holding the directory of the coefficient tables
pub const COEFF_DIR_ENV: &str = "INOUE14_COEFF_DIR";

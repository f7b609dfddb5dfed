//! # IGM optical depth
//!
//! The intergalactic optical depth of Inoue et al. (2014) is the sum of four
//! contributions:
//!
//! | Component | Absorbers | Function |
//! |-----------|-----------|----------|
//! | Lyman series | Lyman-alpha forest | [`tau_ls_laf`](crate::optical_depth::lyman_series::tau_ls_laf) |
//! | Lyman series | damped Lyman-alpha systems | [`tau_ls_dla`](crate::optical_depth::lyman_series::tau_ls_dla) |
//! | Lyman continuum | Lyman-alpha forest | [`tau_lc_laf`](crate::optical_depth::lyman_continuum::tau_lc_laf) |
//! | Lyman continuum | damped Lyman-alpha systems | [`tau_lc_dla`](crate::optical_depth::lyman_continuum::tau_lc_dla) |
//!
//! All four are pure functions of the source redshift and the observed wavelength; the
//! Lyman-series terms also read the per-transition [`CoefficientTable`]. No input is
//! validated: non-finite or negative arguments give unspecified (possibly NaN) results.
//!
//! ```rust
//! use inoue_igm::coefficients::{CoefficientTable, TransitionRecord};
//! use inoue_igm::optical_depth::optical_depth;
//!
//! let table = CoefficientTable::new(vec![TransitionRecord {
//!     lambda_rest: 1215.67,
//!     laf: [1.690e-02, 2.354e-03, 1.026e-04],
//!     dla: [1.617e-04, 5.390e-05],
//! }]);
//!
//! let tau = optical_depth(3.0, 4500.0, &table);
//! assert_eq!(tau.lc_laf, 0.0);
//! assert!(tau.total() > 0.0);
//! ```
pub mod lyman_continuum;
pub mod lyman_series;

use crate::{
    coefficients::CoefficientTable,
    constants::{Angstrom, Redshift, Tau},
};
use lyman_continuum::{tau_lc_dla, tau_lc_laf};
use lyman_series::{tau_ls_dla, tau_ls_laf};

/// The four contributions to the IGM optical depth at one `(z_S, λ_obs)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OpticalDepth {
    /// Lyman series, Lyman-alpha forest
    pub ls_laf: Tau,
    /// Lyman series, damped Lyman-alpha systems
    pub ls_dla: Tau,
    /// Lyman continuum, Lyman-alpha forest
    pub lc_laf: Tau,
    /// Lyman continuum, damped Lyman-alpha systems
    pub lc_dla: Tau,
}

impl OpticalDepth {
    /// Sum of the four contributions, added in the order LS-LAF, LS-DLA, LC-LAF, LC-DLA.
    pub fn total(&self) -> Tau {
        self.ls_laf + self.ls_dla + self.lc_laf + self.lc_dla
    }

    /// `exp(-τ)`
    pub fn transmission(&self) -> f64 {
        (-self.total()).exp()
    }
}

/// Evaluate the four optical-depth components.
pub fn optical_depth(
    z_source: Redshift,
    lambda_obs: Angstrom,
    table: &CoefficientTable,
) -> OpticalDepth {
    OpticalDepth {
        ls_laf: tau_ls_laf(z_source, lambda_obs, table),
        ls_dla: tau_ls_dla(z_source, lambda_obs, table),
        lc_laf: tau_lc_laf(z_source, lambda_obs),
        lc_dla: tau_lc_dla(z_source, lambda_obs),
    }
}

//! Lyman-continuum (photoelectric) optical depth of the LAF and DLA absorbers.
//!
//! Closed-form integrals of the absorber distributions over redshift. Both functions vanish
//! redward of the Lyman limit redshifted to the source. Branches are tested top to bottom
//! and the first match wins; all comparisons are strict.
use crate::constants::{Angstrom, Redshift, Tau, LAMBDA_LYMAN_LIMIT, Z1_DLA, Z1_LAF, Z2_LAF};

/// Lyman-continuum optical depth of the damped Lyman-alpha systems.
///
/// Arguments
/// -----------------
/// * `z_source`: redshift of the source.
/// * `lambda_obs`: observed wavelength in Angstroms.
///
/// Return
/// ----------
/// * The optical depth, `0.0` when `lambda_obs > 911.8 (1 + z_source)`.
pub fn tau_lc_dla(z_source: Redshift, lambda_obs: Angstrom) -> Tau {
    let x = lambda_obs / LAMBDA_LYMAN_LIMIT;
    let zp1 = 1. + z_source;

    if lambda_obs > LAMBDA_LYMAN_LIMIT * zp1 {
        0.0
    } else if z_source < Z1_DLA {
        0.2113 * zp1.powf(2.0) - 0.07661 * zp1.powf(2.3) * x.powf(-0.3) - 0.1347 * x.powf(2.0)
    } else if lambda_obs > LAMBDA_LYMAN_LIMIT * (1. + Z1_DLA) {
        0.04696 * zp1.powf(3.0) - 0.01779 * zp1.powf(3.3) * x.powf(-0.3) - 0.02916 * x.powf(3.0)
    } else {
        0.6340 + 0.04696 * zp1.powf(3.0)
            - 0.01779 * zp1.powf(3.3) * x.powf(-0.3)
            - 0.1347 * x.powf(2.0)
            - 0.2905 * x.powf(-0.3)
    }
}

/// Lyman-continuum optical depth of the Lyman-alpha forest.
///
/// The source redshift selects one of three regimes (split at
/// [`Z1_LAF`](crate::constants::Z1_LAF) and [`Z2_LAF`](crate::constants::Z2_LAF)); inside
/// the upper regimes the observed wavelength is compared with the Lyman limit redshifted
/// to each breakpoint.
pub fn tau_lc_laf(z_source: Redshift, lambda_obs: Angstrom) -> Tau {
    let x = lambda_obs / LAMBDA_LYMAN_LIMIT;
    let zp1 = 1. + z_source;

    if lambda_obs > LAMBDA_LYMAN_LIMIT * zp1 {
        0.0
    } else if z_source < Z1_LAF {
        0.3248 * (x.powf(1.2) - zp1.powf(-0.9) * x.powf(2.1))
    } else if z_source < Z2_LAF {
        if lambda_obs > LAMBDA_LYMAN_LIMIT * (1. + Z1_LAF) {
            0.02545 * (zp1.powf(1.6) * x.powf(2.1) - x.powf(3.7))
        } else {
            0.02545 * zp1.powf(1.6) * x.powf(2.1) + 0.3248 * x.powf(1.2) - 0.2496 * x.powf(2.1)
        }
    } else if lambda_obs > LAMBDA_LYMAN_LIMIT * (1. + Z2_LAF) {
        0.0005221 * (zp1.powf(3.4) * x.powf(2.1) - x.powf(5.5))
    } else if lambda_obs > LAMBDA_LYMAN_LIMIT * (1. + Z1_LAF) {
        0.0005221 * zp1.powf(3.4) * x.powf(2.1) + 0.2182 * x.powf(2.1) - 0.02545 * x.powf(3.7)
    } else {
        0.0005221 * zp1.powf(3.4) * x.powf(2.1) + 0.3248 * x.powf(1.2) - 0.0314 * x.powf(2.1)
    }
}

#[cfg(test)]
mod lyman_continuum_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_zero_redward_of_lyman_limit() {
        for z_source in [0.5, 1.2, 2.0, 3.0, 4.7, 6.0] {
            let lambda_obs = LAMBDA_LYMAN_LIMIT * (1. + z_source) * (1. + 1e-12);
            assert_eq!(tau_lc_dla(z_source, lambda_obs), 0.0);
            assert_eq!(tau_lc_laf(z_source, lambda_obs), 0.0);
        }
    }

    #[test]
    fn test_reference_values() {
        assert_relative_eq!(tau_lc_laf(1.0, 1500.0), 0.09516521957667529, max_relative = 1e-12);
        assert_relative_eq!(tau_lc_dla(1.0, 1500.0), 0.15571983208109313, max_relative = 1e-12);

        assert_relative_eq!(tau_lc_laf(2.5, 2800.0), 0.37630630090269634, max_relative = 1e-12);
        assert_relative_eq!(tau_lc_dla(2.5, 2800.0), 0.3757080360985202, max_relative = 1e-12);

        assert_relative_eq!(tau_lc_laf(5.5, 4000.0), 5.583372882970224, max_relative = 1e-12);
        assert_relative_eq!(tau_lc_dla(5.5, 4000.0), 4.93729487925724, max_relative = 1e-12);

        assert_relative_eq!(tau_lc_laf(5.5, 1900.0), 2.053750080429692, max_relative = 1e-12);
        assert_relative_eq!(tau_lc_dla(5.5, 1900.0), 5.839624350476221, max_relative = 1e-12);
    }

    #[test]
    fn test_dla_branch_selection() {
        let eps = 1e-9;

        // source redshift just below / above Z1_DLA, well inside the continuum
        let lambda_obs = 1500.0;
        let z_source = Z1_DLA - eps;
        let zp1 = 1. + z_source;
        let x: f64 = lambda_obs / LAMBDA_LYMAN_LIMIT;
        let low_z = 0.2113 * zp1.powf(2.0)
            - 0.07661 * zp1.powf(2.3) * x.powf(-0.3)
            - 0.1347 * x.powf(2.0);
        assert_eq!(tau_lc_dla(z_source, lambda_obs), low_z);

        let zp1 = 1. + Z1_DLA;
        let high_z_blue = 0.6340 + 0.04696 * zp1.powf(3.0)
            - 0.01779 * zp1.powf(3.3) * x.powf(-0.3)
            - 0.1347 * x.powf(2.0)
            - 0.2905 * x.powf(-0.3);
        assert_eq!(tau_lc_dla(Z1_DLA, lambda_obs), high_z_blue);

        // wavelength threshold at 911.8 (1 + Z1_DLA) for z_S >= Z1_DLA
        let z_source: f64 = 3.0;
        let zp1 = 1. + z_source;
        let threshold = LAMBDA_LYMAN_LIMIT * (1. + Z1_DLA);

        let x = threshold / LAMBDA_LYMAN_LIMIT;
        let at_threshold = 0.6340 + 0.04696 * zp1.powf(3.0)
            - 0.01779 * zp1.powf(3.3) * x.powf(-0.3)
            - 0.1347 * x.powf(2.0)
            - 0.2905 * x.powf(-0.3);
        assert_eq!(tau_lc_dla(z_source, threshold), at_threshold);

        let above = threshold + 1e-6;
        let x = above / LAMBDA_LYMAN_LIMIT;
        let red = 0.04696 * zp1.powf(3.0)
            - 0.01779 * zp1.powf(3.3) * x.powf(-0.3)
            - 0.02916 * x.powf(3.0);
        assert_eq!(tau_lc_dla(z_source, above), red);
    }

    #[test]
    fn test_laf_branch_selection() {
        let eps = 1e-9;
        let lambda_obs = 1500.0;
        let x: f64 = lambda_obs / LAMBDA_LYMAN_LIMIT;

        // z_S just below Z1_LAF uses the low-redshift form
        let z_source = Z1_LAF - eps;
        let zp1 = 1. + z_source;
        let low = 0.3248 * (x.powf(1.2) - zp1.powf(-0.9) * x.powf(2.1));
        assert_eq!(tau_lc_laf(z_source, lambda_obs), low);

        // z_S == Z1_LAF belongs to the intermediate regime
        let zp1 = 1. + Z1_LAF;
        let mid_blue =
            0.02545 * zp1.powf(1.6) * x.powf(2.1) + 0.3248 * x.powf(1.2) - 0.2496 * x.powf(2.1);
        assert_eq!(tau_lc_laf(Z1_LAF, lambda_obs), mid_blue);

        // intermediate regime, around 911.8 (1 + Z1_LAF)
        let z_source: f64 = 3.0;
        let zp1 = 1. + z_source;
        let threshold = LAMBDA_LYMAN_LIMIT * (1. + Z1_LAF);

        let x = threshold / LAMBDA_LYMAN_LIMIT;
        let at_threshold =
            0.02545 * zp1.powf(1.6) * x.powf(2.1) + 0.3248 * x.powf(1.2) - 0.2496 * x.powf(2.1);
        assert_eq!(tau_lc_laf(z_source, threshold), at_threshold);

        let above = threshold + 1e-6;
        let x = above / LAMBDA_LYMAN_LIMIT;
        let red = 0.02545 * (zp1.powf(1.6) * x.powf(2.1) - x.powf(3.7));
        assert_eq!(tau_lc_laf(z_source, above), red);

        // z_S == Z2_LAF belongs to the high-redshift regime
        let z_source = Z2_LAF;
        let zp1 = 1. + z_source;
        let x = lambda_obs / LAMBDA_LYMAN_LIMIT;
        let high_blue =
            0.0005221 * zp1.powf(3.4) * x.powf(2.1) + 0.3248 * x.powf(1.2) - 0.0314 * x.powf(2.1);
        assert_eq!(tau_lc_laf(z_source, lambda_obs), high_blue);

        // high-redshift regime, around 911.8 (1 + Z2_LAF) and 911.8 (1 + Z1_LAF)
        let z_source: f64 = 6.0;
        let zp1 = 1. + z_source;

        let threshold = LAMBDA_LYMAN_LIMIT * (1. + Z2_LAF);
        let x = threshold / LAMBDA_LYMAN_LIMIT;
        let middle =
            0.0005221 * zp1.powf(3.4) * x.powf(2.1) + 0.2182 * x.powf(2.1) - 0.02545 * x.powf(3.7);
        assert_eq!(tau_lc_laf(z_source, threshold), middle);

        let above = threshold + 1e-6;
        let x = above / LAMBDA_LYMAN_LIMIT;
        let red = 0.0005221 * (zp1.powf(3.4) * x.powf(2.1) - x.powf(5.5));
        assert_eq!(tau_lc_laf(z_source, above), red);

        let threshold = LAMBDA_LYMAN_LIMIT * (1. + Z1_LAF);
        let x = threshold / LAMBDA_LYMAN_LIMIT;
        let blue =
            0.0005221 * zp1.powf(3.4) * x.powf(2.1) + 0.3248 * x.powf(1.2) - 0.0314 * x.powf(2.1);
        assert_eq!(tau_lc_laf(z_source, threshold), blue);
    }
}

//! # inoue_igm
//!
//! Intergalactic-medium (IGM) attenuation of the light of a distant source, following the
//! analytic prescription of Inoue, Shimizu, Iwata & Tanaka (2014, MNRAS 442, 1805).
//!
//! Neutral hydrogen between the source and the observer absorbs through the discrete
//! Lyman series lines and the Lyman continuum. Both processes are evaluated for two absorber
//! populations, the Lyman-alpha forest (LAF) and the damped Lyman-alpha systems (DLA), and
//! the resulting optical depths are combined into a transmitted fraction `exp(-τ)`.
//!
//! ```rust, no_run
//! use inoue_igm::{coefficients::load_coefficients, transmission::transmission};
//!
//! let table = load_coefficients("data/inoue14").unwrap();
//! let t = transmission(3.0, 4500.0, &table);
//! ```
pub mod coefficients;
pub mod constants;
pub mod igm_errors;
pub mod inoue14;
pub mod optical_depth;
pub mod transmission;

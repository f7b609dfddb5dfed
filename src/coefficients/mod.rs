//! # Inoue (2014) coefficient tables
//!
//! This module loads the **per-transition coefficients** of the Lyman series used by the
//! line optical-depth evaluators. Two whitespace-delimited text tables are read from a
//! directory:
//!
//! - `LAFcoeff.txt` – `index  λ_rest  A_LAF,1  A_LAF,2  A_LAF,3` (Lyman-alpha forest)
//! - `DLAcoeff.txt` – `index  λ_rest  A_DLA,1  A_DLA,2` (damped Lyman-alpha systems)
//!
//! Row `j` of both files describes the same transition. The rest-frame wavelength is taken
//! from the LAF table; the wavelength column of the DLA table is read but ignored.
//!
//! ## Public API
//!
//! ### [`crate::coefficients::CoefficientTable`]
//!
//! An ordered sequence of [`crate::coefficients::TransitionRecord`], one per Lyman
//! transition, in file order. It is immutable once loaded and is passed by reference to
//! every evaluator call.
//!
//! ### [`crate::coefficients::load_coefficients`]
//!
//! ```rust, no_run
//! use inoue_igm::coefficients::load_coefficients;
//!
//! let table = load_coefficients("data/inoue14").unwrap();
//! println!("{} transitions", table.len());
//! ```
//!
//! The loose-array view `(lam1, ALAF, ADLA)` is available through
//! [`lam1`](crate::coefficients::CoefficientTable::lam1),
//! [`alaf`](crate::coefficients::CoefficientTable::alaf) and
//! [`adla`](crate::coefficients::CoefficientTable::adla).
//!
//! ## Errors
//!
//! - A missing or unreadable file yields [`IgmError::FileNotOpenable`] naming the LAF/DLA role.
//! - A line that is not entirely numeric yields [`IgmError::ParseError`].
//! - A row too short for the columns that are read yields [`IgmError::MissingColumns`].
//! - A DLA table with fewer rows than the LAF table yields
//!   [`IgmError::TransitionCountMismatch`]; extra DLA rows are dropped with a warning.
mod table_parser;

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use itertools::Itertools;
use log::{debug, info, warn};
use nalgebra::{DMatrix, DVector};

use crate::{
    constants::{Angstrom, DLA_COEFF_FILE, LAF_COEFF_FILE},
    igm_errors::IgmError,
};
use table_parser::parse_table;

/// Which of the two coefficient tables a row or a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableRole {
    Laf,
    Dla,
}

impl TableRole {
    /// File name of the table inside the coefficient directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            TableRole::Laf => LAF_COEFF_FILE,
            TableRole::Dla => DLA_COEFF_FILE,
        }
    }

    /// Number of leading columns that must be present on every row.
    fn min_columns(&self) -> usize {
        match self {
            TableRole::Laf => 5,
            TableRole::Dla => 4,
        }
    }
}

impl fmt::Display for TableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableRole::Laf => write!(f, "LAF"),
            TableRole::Dla => write!(f, "DLA"),
        }
    }
}

/// One Lyman-series transition with its LAF and DLA coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRecord {
    /// Rest-frame wavelength of the transition
    pub lambda_rest: Angstrom,
    /// LAF coefficients for the three redshift regimes
    pub laf: [f64; 3],
    /// DLA coefficients for the two redshift regimes
    pub dla: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoefficientTable {
    transitions: Vec<TransitionRecord>,
}

impl CoefficientTable {
    pub fn new(transitions: Vec<TransitionRecord>) -> Self {
        CoefficientTable { transitions }
    }

    /// Build a table from the loose `(lam1, ALAF, ADLA)` arrays.
    ///
    /// Arguments
    /// -----------------
    /// * `lam1`: rest-frame wavelengths, one per transition.
    /// * `alaf`: LAF coefficients, N×3.
    /// * `adla`: DLA coefficients, N×2.
    ///
    /// Return
    /// ----------
    /// * The table, or [`IgmError::ShapeMismatch`] if the row counts differ from `lam1.len()`
    ///   or a coefficient matrix has the wrong number of columns.
    pub fn from_arrays(
        lam1: &DVector<f64>,
        alaf: &DMatrix<f64>,
        adla: &DMatrix<f64>,
    ) -> Result<Self, IgmError> {
        let n = lam1.len();
        for (rows, cols, expected_cols) in [
            (alaf.nrows(), alaf.ncols(), 3),
            (adla.nrows(), adla.ncols(), 2),
        ] {
            if rows != n {
                return Err(IgmError::ShapeMismatch {
                    expected: n,
                    found: rows,
                });
            }
            if cols != expected_cols {
                return Err(IgmError::ShapeMismatch {
                    expected: expected_cols,
                    found: cols,
                });
            }
        }

        let transitions = (0..n)
            .map(|j| TransitionRecord {
                lambda_rest: lam1[j],
                laf: [alaf[(j, 0)], alaf[(j, 1)], alaf[(j, 2)]],
                dla: [adla[(j, 0)], adla[(j, 1)]],
            })
            .collect();

        Ok(CoefficientTable { transitions })
    }

    /// Parse the contents of the LAF and DLA tables.
    ///
    /// Blank lines are skipped. Column 1 of the LAF table gives the rest-frame wavelength,
    /// columns 2..4 the LAF coefficients; columns 2..3 of the DLA table give the DLA
    /// coefficients. Extra trailing columns are ignored, as are DLA rows beyond the last
    /// LAF row; a DLA table shorter than the LAF table is an error.
    pub fn from_strs(laf_text: &str, dla_text: &str) -> Result<Self, IgmError> {
        let laf_rows = rows_with_min_columns(laf_text, TableRole::Laf)?;
        let mut dla_rows = rows_with_min_columns(dla_text, TableRole::Dla)?;

        if dla_rows.len() < laf_rows.len() {
            return Err(IgmError::TransitionCountMismatch {
                laf: laf_rows.len(),
                dla: dla_rows.len(),
            });
        }
        if dla_rows.len() > laf_rows.len() {
            warn!(
                "DLA table lists {} transitions, only the first {} matching the LAF table are used",
                dla_rows.len(),
                laf_rows.len()
            );
            dla_rows.truncate(laf_rows.len());
        }

        let transitions = laf_rows
            .into_iter()
            .zip_eq(dla_rows)
            .map(|(laf, dla)| TransitionRecord {
                lambda_rest: laf[1],
                laf: [laf[2], laf[3], laf[4]],
                dla: [dla[2], dla[3]],
            })
            .collect_vec();

        if transitions.is_empty() {
            warn!("Coefficient tables contain no transition, line optical depths will be zero");
        }

        Ok(CoefficientTable { transitions })
    }

    /// Read `LAFcoeff.txt` and `DLAcoeff.txt` from `dir`.
    pub fn from_dir(dir: &Utf8Path) -> Result<Self, IgmError> {
        let laf_text = read_table(dir, TableRole::Laf)?;
        let dla_text = read_table(dir, TableRole::Dla)?;

        let table = Self::from_strs(&laf_text, &dla_text)?;
        info!(
            "Loaded {} Lyman-series transitions from {dir}",
            table.len()
        );
        Ok(table)
    }

    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransitionRecord> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Rest-frame wavelengths of all transitions, in table order.
    pub fn lam1(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.iter().map(|t| t.lambda_rest))
    }

    /// LAF coefficients as an N×3 matrix.
    pub fn alaf(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.len(), 3, |j, k| self.transitions[j].laf[k])
    }

    /// DLA coefficients as an N×2 matrix.
    pub fn adla(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.len(), 2, |j, k| self.transitions[j].dla[k])
    }
}

impl<'a> IntoIterator for &'a CoefficientTable {
    type Item = &'a TransitionRecord;
    type IntoIter = std::slice::Iter<'a, TransitionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.transitions.iter()
    }
}

/// Load the Inoue (2014) coefficient tables from a directory.
///
/// Arguments
/// -----------------
/// * `dir`: directory containing `LAFcoeff.txt` and `DLAcoeff.txt`.
///
/// Return
/// ----------
/// * The [`CoefficientTable`], or an [`IgmError`] if a file cannot be opened or parsed.
///
/// See also
/// ------------
/// * [`CoefficientTable::from_strs`] – Same parsing from in-memory contents.
pub fn load_coefficients(dir: impl AsRef<Utf8Path>) -> Result<CoefficientTable, IgmError> {
    CoefficientTable::from_dir(dir.as_ref())
}

fn read_table(dir: &Utf8Path, role: TableRole) -> Result<String, IgmError> {
    let path: Utf8PathBuf = dir.join(role.file_name());
    debug!("Reading {role} coefficient table from {path}");

    std::fs::read_to_string(&path).map_err(|source| IgmError::FileNotOpenable {
        role,
        path,
        source,
    })
}

fn rows_with_min_columns(text: &str, role: TableRole) -> Result<Vec<Vec<f64>>, IgmError> {
    let rows = parse_table(text, role)?;
    let expected = role.min_columns();

    let blank_lines = text.lines().count() - rows.len();
    if blank_lines > 0 {
        warn!("Skipped {blank_lines} blank lines in the {role} table");
    }
    debug!("Parsed {} rows from the {role} table", rows.len());

    rows.into_iter()
        .map(|(line_number, row)| {
            if row.len() < expected {
                Err(IgmError::MissingColumns {
                    role,
                    line_number,
                    found: row.len(),
                    expected,
                })
            } else {
                Ok(row)
            }
        })
        .collect()
}

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::coefficients::TableRole;

#[derive(Error, Debug)]
pub enum IgmError {
    #[error("*** Cannot open the {role} file! *** ({path}): {source}")]
    FileNotOpenable {
        role: TableRole,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse line {line_number} of the {role} file: {line:?}")]
    ParseError {
        role: TableRole,
        line_number: usize,
        line: String,
    },

    #[error("Line {line_number} of the {role} file has {found} columns, at least {expected} are required")]
    MissingColumns {
        role: TableRole,
        line_number: usize,
        found: usize,
        expected: usize,
    },

    #[error("The LAF table lists {laf} transitions but the DLA table lists {dla}")]
    TransitionCountMismatch { laf: usize, dla: usize },

    #[error("Array shape mismatch: expected {expected} elements, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("No coefficient directory given: {0}")]
    MissingCoefficientDir(String),
}

impl PartialEq for IgmError {
    fn eq(&self, other: &Self) -> bool {
        use IgmError::*;
        match (self, other) {
            // io::Error is not comparable: equal if same role and path
            (
                FileNotOpenable {
                    role: r1, path: p1, ..
                },
                FileNotOpenable {
                    role: r2, path: p2, ..
                },
            ) => r1 == r2 && p1 == p2,
            (
                ParseError {
                    role: r1,
                    line_number: n1,
                    line: l1,
                },
                ParseError {
                    role: r2,
                    line_number: n2,
                    line: l2,
                },
            ) => r1 == r2 && n1 == n2 && l1 == l2,
            (
                MissingColumns {
                    role: r1,
                    line_number: n1,
                    found: f1,
                    expected: e1,
                },
                MissingColumns {
                    role: r2,
                    line_number: n2,
                    found: f2,
                    expected: e2,
                },
            ) => r1 == r2 && n1 == n2 && f1 == f2 && e1 == e2,
            (
                TransitionCountMismatch { laf: a1, dla: b1 },
                TransitionCountMismatch { laf: a2, dla: b2 },
            ) => a1 == a2 && b1 == b2,
            (
                ShapeMismatch {
                    expected: e1,
                    found: f1,
                },
                ShapeMismatch {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,
            (MissingCoefficientDir(a), MissingCoefficientDir(b)) => a == b,

            _ => false,
        }
    }
}

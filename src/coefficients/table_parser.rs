use nom::{
    character::complete::{space0, space1},
    combinator::all_consuming,
    multi::separated_list1,
    number::complete::double,
    sequence::delimited,
    IResult, Parser,
};

use crate::igm_errors::IgmError;

use super::TableRole;

/// One whitespace-delimited row of floating point values, nothing else on the line.
pub(super) fn parse_row(input: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(delimited(space0, separated_list1(space1, double), space0)).parse(input)
}

/// Parse every non-blank line of a coefficient table.
///
/// Each returned row is paired with its 1-based line number in the source text so
/// that later shape checks can point at the offending line.
pub(super) fn parse_table(text: &str, role: TableRole) -> Result<Vec<(usize, Vec<f64>)>, IgmError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_row(line)
                .map(|(_, row)| (idx + 1, row))
                .map_err(|_e| IgmError::ParseError {
                    role,
                    line_number: idx + 1,
                    line: line.to_string(),
                })
        })
        .collect()
}

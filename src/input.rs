//! Parsing integer sequences from command-line text.
//!
//! Tokens may be separated by whitespace, commas, or both, so `3,1,4`,
//! `3 1 4` and `3, 1, 4` all read the same. Empty input is an empty
//! sequence.

use std::num::IntErrorKind;

use crate::error::InputError;

/// Parse a whole line of text.
pub fn parse_sequence(text: &str) -> Result<Vec<i32>, InputError> {
    parse_tokens(text.split(|c: char| c == ',' || c.is_whitespace()))
}

/// Parse pre-split arguments; each one may itself hold several values.
pub fn parse_tokens<I, S>(tokens: I) -> Result<Vec<i32>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = Vec::new();
    for arg in tokens {
        for token in arg
            .as_ref()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let index = values.len();
            values.push(parse_value(index, token)?);
        }
    }
    Ok(values)
}

fn parse_value(index: usize, token: &str) -> Result<i32, InputError> {
    token.parse::<i32>().map_err(|source| match source.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange {
            index,
            token: token.to_string(),
        },
        _ => InputError::InvalidValue {
            index,
            token: token.to_string(),
            source,
        },
    })
}

//! # Text format
//!
//! Parsing of exact numbers, vectors, matrices and whole problems. See the module level
//! documentation of `io` for the format.
use num_traits::Zero;

use crate::algorithm::error::TableauError;
use crate::algorithm::tableau::Tableau;
use crate::data::number_types::rational::{BigInt, RationalBig};
use crate::io::error::ParseError;

/// A linear program `max c^T x s.t. Ax <= b, x >= 0` as read from text.
#[derive(Debug, Eq, PartialEq)]
pub struct Problem {
    /// Constraint rows.
    pub a: Vec<Vec<RationalBig>>,
    /// Right-hand side.
    pub b: Vec<RationalBig>,
    /// Cost vector.
    pub c: Vec<RationalBig>,
}

impl Problem {
    /// Set up the tableau for this problem.
    ///
    /// # Errors
    ///
    /// If the number of coefficients differs between lines.
    pub fn into_tableau(self) -> Result<Tableau, TableauError> {
        Tableau::new(&self.a, &self.b, &self.c)
    }
}

/// Parse a whole problem.
///
/// # Errors
///
/// If a line can't be parsed, or there isn't exactly one `max` line.
pub fn parse(program: &str) -> Result<Problem, ParseError> {
    let mut c = None;
    let mut a = Vec::new();
    let mut b = Vec::new();

    for (line_number, line) in program.lines().enumerate().map(|(i, line)| (i + 1, line)) {
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        if let Some(costs) = content.strip_prefix("max") {
            if c.is_some() {
                return Err(ParseError::with_file_location("second objective line", (line_number, line)));
            }
            let costs = parse_vector(costs).map_err(|error| ParseError::with_cause(
                "invalid objective",
                ParseError::with_cause(error.description(), ParseError::with_file_location(
                    "on this line", (line_number, line),
                )),
            ))?;
            c = Some(costs);
        } else {
            let (row, rhs) = content.split_once("<=")
                .ok_or_else(|| ParseError::with_file_location(
                    "a constraint should be of the form `a1 a2 .. <= b`", (line_number, line),
                ))?;
            let in_line = |error: ParseError| ParseError::with_cause(
                "invalid constraint",
                ParseError::with_cause(error.description(), ParseError::with_file_location(
                    "on this line", (line_number, line),
                )),
            );
            a.push(parse_vector(row).map_err(in_line)?);
            b.push(parse_number(rhs.trim()).map_err(in_line)?);
        }
    }

    match c {
        Some(c) => Ok(Problem { a, b, c }),
        None => Err(ParseError::new("no objective line starting with `max`")),
    }
}

/// Parse rows separated by `;` or newlines.
///
/// Empty rows are skipped.
///
/// # Errors
///
/// If one of the values can't be parsed.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<RationalBig>>, ParseError> {
    text.split([';', '\n'])
        .filter(|row| !row.trim().is_empty())
        .enumerate()
        .map(|(i, row)| parse_vector(row)
            .map_err(|error| ParseError::with_cause(format!("in row {}", i), error)))
        .collect()
}

/// Parse values separated by whitespace or `,`.
///
/// # Errors
///
/// If one of the values can't be parsed.
pub fn parse_vector(text: &str) -> Result<Vec<RationalBig>, ParseError> {
    text.split(|character: char| character.is_whitespace() || character == ',')
        .filter(|value| !value.is_empty())
        .map(parse_number)
        .collect()
}

/// Parse a single number exactly.
///
/// Accepted are integers (`-7`), fractions (`3/8`) and decimals (`1.25`, `-.5`).
///
/// # Errors
///
/// If the text is not a number of one of these forms, or a fraction has denominator zero.
pub fn parse_number(text: &str) -> Result<RationalBig, ParseError> {
    let invalid = || ParseError::new(format!("could not parse \"{}\" as a number", text));

    if let Some((numerator, denominator)) = text.split_once('/') {
        let numerator = parse_integer(numerator.trim()).ok_or_else(invalid)?;
        let denominator = parse_integer(denominator.trim()).ok_or_else(invalid)?;
        if denominator.is_zero() {
            return Err(ParseError::new(format!("denominator of \"{}\" is zero", text)));
        }
        Ok(RationalBig::new(numerator, denominator))
    } else if let Some((whole, fraction)) = text.split_once('.') {
        if fraction.is_empty() || !fraction.bytes().all(|digit| digit.is_ascii_digit()) {
            return Err(invalid());
        }
        let negative = whole.starts_with('-');
        let unsigned = whole.strip_prefix(['-', '+']).unwrap_or(whole);
        if unsigned.starts_with(['-', '+']) {
            return Err(invalid());
        }
        let whole = match unsigned {
            "" => BigInt::zero(),
            digits => parse_integer(digits).ok_or_else(invalid)?,
        };
        let scale = BigInt::from(10).pow(fraction.len() as u32);
        let fraction = parse_integer(fraction).ok_or_else(invalid)?;
        let magnitude = RationalBig::new(whole * &scale + fraction, scale);

        Ok(if negative { -magnitude } else { magnitude })
    } else {
        parse_integer(text).map(RationalBig::from_integer).ok_or_else(invalid)
    }
}

fn parse_integer(text: &str) -> Option<BigInt> {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|digit| digit.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

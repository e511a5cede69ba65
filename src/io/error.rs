//! # Error reporting for reading of linear programs
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error as StdError;
use std::fmt;
use std::io;

use thiserror::Error;

use crate::algorithm::error::TableauError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a linear program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The values were read, but don't describe a valid tableau.
    ///
    /// For example, the constraint rows might not all be of the same length.
    #[error(transparent)]
    LinearProgram(#[from] TableauError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more `ParseError`s to provide more detail. At the end of this chain,
/// there may be a file location containing a line number and line, at which the error was caused.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    cause: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a file line number and line contents, or another `ParseError` with its own
/// description and optionally, a cause.
#[derive(Debug, Eq, PartialEq)]
enum ParseErrorSource {
    FileLocation(usize, String),
    Nested(Box<ParseError>),
}

/// A `FileLocation` references a line in the text by its (one based) line number. It contains a
/// reference to the line itself.
pub(crate) type FileLocation<'a> = (usize, &'a str);

impl ParseError {
    /// Create a new `ParseError` with only a description.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), cause: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    pub(crate) fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, line) = file_location;
        ParseError {
            description: description.into(),
            cause: Some(ParseErrorSource::FileLocation(line_number, line.to_string())),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> ParseError {
        ParseError {
            description: description.into(),
            cause: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// The description of only this error, without its causes.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get all errors in the chain, leading up to this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![format!("ParseError: {}", self.description)];

        if let Some(cause) = &self.cause {
            match cause {
                ParseErrorSource::FileLocation(line_number, line) => {
                    descriptions.push(format!("\tCaused at line\t{}:\t{}", line_number, line));
                }
                ParseErrorSource::Nested(error) => {
                    descriptions.append(&mut error.chain_description());
                }
            }
        }

        descriptions
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.chain_description().join("\n"))
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Some(ParseErrorSource::Nested(error)) = &self.cause {
            Some(&**error)
        } else {
            None
        }
    }
}

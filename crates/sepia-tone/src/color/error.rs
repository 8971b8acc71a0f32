//! Error type for `#RRGGBB` background colors

use std::fmt;

/// Why a string could not be read as an [`Rgb`](super::Rgb) color.
///
/// Both variants carry the rejected input so the message stands on its own
/// when it reaches a config or command-line diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after the optional `#` is neither 3 nor 6
    WrongDigitCount {
        /// The string as given
        input: String,
        /// Number of characters after stripping `#`
        digits: usize,
    },
    /// A character that is not `0-9`, `a-f` or `A-F`
    NotHexDigit {
        /// The string as given
        input: String,
        /// The offending character
        found: char,
    },
}

impl ParseColorError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseColorError::WrongDigitCount { input, .. } => input,
            ParseColorError::NotHexDigit { input, .. } => input,
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::WrongDigitCount { input, digits } => write!(
                f,
                "color '{}' has {} hex digits, expected 3 or 6",
                input, digits
            ),
            ParseColorError::NotHexDigit { input, found } => {
                write!(f, "color '{}' contains non-hex character '{}'", input, found)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

use std::error::Error;
use std::fmt;

/// Why a parse produced no program
///
/// Every variant carries the number of errors reported up to the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Recovery could not resynchronize before the end of input
    Aborted { errors: usize },
    /// More errors were reported than `ParserConfig::max_errors` allows
    TooManyErrors { errors: usize },
    /// The parser stacks would have grown beyond `ParserConfig::max_stack_depth`
    StackExhausted { errors: usize },
}

impl ParseFailure {
    pub fn errors(&self) -> usize {
        match self {
            ParseFailure::Aborted { errors }
            | ParseFailure::TooManyErrors { errors }
            | ParseFailure::StackExhausted { errors } => *errors,
        }
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ParseFailure::Aborted { errors } => {
                write!(f, "Parse aborted after {} error(s)", errors)
            }
            ParseFailure::TooManyErrors { errors } => {
                write!(f, "More than {} errors", errors.saturating_sub(1))
            }
            ParseFailure::StackExhausted { .. } => write!(f, "Parser stack exhausted"),
        }
    }
}

impl Error for ParseFailure {}

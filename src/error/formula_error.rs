use crate::error::{LexError, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every recoverable failure of loading a formula.
///
/// Hosts report these to the user ("invalid formula") instead of crashing.
pub enum FormulaError {
    /// The text could not be tokenized.
    Lex(LexError),
    /// The tokens did not form a valid expression.
    Parse(ParseError),
}

impl From<LexError> for FormulaError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for FormulaError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),
            Self::Parse(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Parse(error) => Some(error),
        }
    }
}

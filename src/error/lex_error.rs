#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing formula text.
pub enum LexError {
    /// The scanner met a character sequence it cannot classify.
    UnexpectedCharacter {
        /// The offending text.
        text:   String,
        /// Byte offset of the text in the source.
        offset: usize,
    },
    /// A word grew past the accumulator limit.
    WordTooLong {
        /// The maximum number of characters a word may hold.
        max:    usize,
        /// Byte offset where the word starts.
        offset: usize,
    },
    /// A numeric literal cannot be represented exactly as a float.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Byte offset where the literal starts.
        offset:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { text, offset } => {
                write!(f, "Error at byte {offset}: Unexpected character sequence '{text}'.")
            },
            Self::WordTooLong { max, offset } => {
                write!(f, "Error at byte {offset}: Word is longer than {max} characters.")
            },
            Self::LiteralTooLarge { literal, offset } => {
                write!(f, "Error at byte {offset}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}

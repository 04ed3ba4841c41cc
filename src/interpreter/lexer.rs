use std::fmt;

use logos::Logos;

use crate::{
    ast::Operator,
    error::LexError,
    util::num::{push_decimal_digit, u64_to_f64_checked},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Maximum number of characters a single word may accumulate.
pub const MAX_WORD_LEN: usize = 64;

/// Represents a lexical token of the formula language.
///
/// Tokens are produced once by [`tokenize`], kept in order and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// `(`
    Open,
    /// `)`
    Close,
    /// One of the keywords `+`, `*`, `sin`, `cos`.
    Operator(Operator),
    /// The free variable.
    ///
    /// Only the first character of an identifier is kept, so `xs` and `x`
    /// both become `Symbol('x')`.
    Symbol(char),
    /// A non-negative integer literal, written with decimal digits only.
    Number(f64),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "'('"),
            Self::Close => write!(f, "')'"),
            Self::Operator(op) => write!(f, "operator '{op}'"),
            Self::Symbol(name) => write!(f, "symbol '{name}'"),
            Self::Number(value) => write!(f, "number {value}"),
        }
    }
}

/// Character classes recognised by the scanner before words are assembled.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum RawToken {
    #[token("(")]
    Open,
    #[token(")")]
    Close,
    #[regex(r"\s+")]
    Whitespace,
    /// A run of characters that belong to a word.
    #[regex(r"[^()\s]+")]
    Fragment,
}

/// The word currently being accumulated.
#[derive(Default)]
struct Word {
    text:   String,
    chars:  usize,
    offset: usize,
}

impl Word {
    fn push(&mut self, fragment: &str, offset: usize) -> LexResult<()> {
        if self.text.is_empty() {
            self.offset = offset;
        }
        self.chars += fragment.chars().count();
        if self.chars > MAX_WORD_LEN {
            return Err(LexError::WordTooLong { max:    MAX_WORD_LEN,
                                               offset: self.offset, });
        }
        self.text.push_str(fragment);
        Ok(())
    }

    fn flush(&mut self, tokens: &mut Vec<(Token, usize)>) -> LexResult<()> {
        if self.text.is_empty() {
            return Ok(());
        }
        let token = classify_word(&self.text, self.offset)?;
        tokens.push((token, self.offset));
        self.text.clear();
        self.chars = 0;
        Ok(())
    }
}

/// Converts formula text into an ordered sequence of tokens.
///
/// `(` emits [`Token::Open`] immediately without ending the current word, so
/// `ab(c` yields `Open` followed by the single word `abc`. `)` and whitespace
/// end the current word.
///
/// # Errors
/// Returns a [`LexError`] if a word is longer than [`MAX_WORD_LEN`] or a
/// numeric literal is too large to be represented exactly.
///
/// # Example
/// ```
/// use grapher::{
///     ast::Operator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("(+ x 5)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Open,
///                 Token::Operator(Operator::Add),
///                 Token::Symbol('x'),
///                 Token::Number(5.0),
///                 Token::Close]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Ok(tokenize_with_offsets(source)?.into_iter().map(|(token, _)| token).collect())
}

/// Like [`tokenize`], but pairs every token with the byte offset where it
/// starts.
///
/// # Errors
/// See [`tokenize`].
pub fn tokenize_with_offsets(source: &str) -> LexResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut word = Word::default();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let offset = lexer.span().start;
        match raw {
            Ok(RawToken::Open) => tokens.push((Token::Open, offset)),
            Ok(RawToken::Close) => {
                word.flush(&mut tokens)?;
                tokens.push((Token::Close, offset));
            },
            Ok(RawToken::Whitespace) => word.flush(&mut tokens)?,
            Ok(RawToken::Fragment) => word.push(lexer.slice(), offset)?,
            Err(()) => {
                return Err(LexError::UnexpectedCharacter { text: lexer.slice().to_string(),
                                                           offset });
            },
        }
    }
    word.flush(&mut tokens)?;

    Ok(tokens)
}

/// Classifies a complete word as a number, an operator or a symbol.
///
/// # Errors
/// Returns [`LexError::LiteralTooLarge`] for digit-only words that cannot be
/// represented exactly, and [`LexError::UnexpectedCharacter`] for an empty
/// word.
///
/// # Example
/// ```
/// use grapher::{
///     ast::Operator,
///     interpreter::lexer::{Token, classify_word},
/// };
///
/// assert_eq!(classify_word("42", 0), Ok(Token::Number(42.0)));
/// assert_eq!(classify_word("sin", 0), Ok(Token::Operator(Operator::Sine)));
/// assert_eq!(classify_word("xyz", 0), Ok(Token::Symbol('x')));
/// ```
pub fn classify_word(word: &str, offset: usize) -> LexResult<Token> {
    if is_number(word) {
        return Ok(Token::Number(parse_number(word, offset)?));
    }
    if let Some(op) = Operator::from_keyword(word) {
        return Ok(Token::Operator(op));
    }
    word.chars()
        .next()
        .map(Token::Symbol)
        .ok_or_else(|| LexError::UnexpectedCharacter { text: String::new(),
                                                       offset })
}

/// Returns whether `word` is a non-empty run of ASCII decimal digits.
///
/// ```
/// use grapher::interpreter::lexer::is_number;
///
/// assert!(is_number("0042"));
/// assert!(!is_number("4x"));
/// assert!(!is_number(""));
/// ```
#[must_use]
pub fn is_number(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a digit-only word as a base-10 integer.
///
/// Digits are read most significant first, so `"12"` is twelve.
///
/// # Errors
/// Returns [`LexError::LiteralTooLarge`] if the value exceeds `2^53 - 1` and
/// [`LexError::UnexpectedCharacter`] if `word` is not a number.
///
/// # Example
/// ```
/// use grapher::{error::LexError, interpreter::lexer::parse_number};
///
/// assert_eq!(parse_number("12", 0), Ok(12.0));
/// assert!(matches!(parse_number("99999999999999999999", 3),
///                  Err(LexError::LiteralTooLarge { offset: 3, .. })));
/// ```
pub fn parse_number(word: &str, offset: usize) -> LexResult<f64> {
    if !is_number(word) {
        return Err(LexError::UnexpectedCharacter { text: word.to_string(),
                                                   offset });
    }
    let too_large = || LexError::LiteralTooLarge { literal: word.to_string(),
                                                   offset };
    let value = word.chars()
                    .try_fold(0_u64, push_decimal_digit)
                    .ok_or_else(too_large)?;
    u64_to_f64_checked(value, too_large)
}

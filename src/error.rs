/// Lexing errors.
///
/// Raised while turning raw formula text into tokens: characters the scanner
/// cannot classify, words that overflow the accumulator, and numeric literals
/// that cannot be represented exactly.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when a token sequence does not match the prefix grammar, including
/// operator arity mismatches and arena exhaustion.
pub mod parse_error;
/// Evaluation errors.
///
/// Internal-consistency failures only. A tree produced by the parser never
/// triggers one.
pub mod eval_error;
/// Errors surfaced at the host boundary when loading a formula.
pub mod formula_error;

pub use eval_error::EvalError;
pub use formula_error::FormulaError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

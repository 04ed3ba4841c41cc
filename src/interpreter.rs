/// The lexer module tokenizes formula text.
///
/// Scans the raw text left to right and produces the ordered token sequence
/// consumed by the parser: parentheses, operators, numbers and the free
/// variable.
///
/// # Responsibilities
/// - Splits text into words around parentheses and whitespace.
/// - Classifies each word as a number, an operator keyword or a symbol.
/// - Reports words that are too long and literals that are too large.
pub mod lexer;
/// The arena module owns the nodes of a formula tree.
///
/// All nodes of one tree are allocated from a single arena with a fixed
/// capacity and released together.
pub mod arena;
/// The parser module builds the tree from tokens.
///
/// A recursive descent over the fully parenthesized prefix grammar that binds
/// the number of operands to each operator.
///
/// # Responsibilities
/// - Allocates one node per leaf and per parenthesized application.
/// - Rejects arity mismatches, stray tokens and excessive nesting.
pub mod parser;
/// The evaluator module computes a formula's value at a point.
pub mod evaluator;
/// The sampler module evaluates a formula over an evenly spaced grid.
///
/// Its output is the ordered point sequence handed to a plotting host.
pub mod sampler;
/// High-level handles tying a tree to its arena.
///
/// Provides [`formula::Formula`] for one parsed formula and
/// [`formula::Session`] for hosts that replace the formula at runtime.
pub mod formula;

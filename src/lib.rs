//! # grapher
//!
//! grapher is the formula front end of a function plotter written in Rust.
//! It reads a fully parenthesized prefix expression in one free variable, such
//! as `(* x (sin x))`, builds a tree for it in an arena and evaluates that tree
//! across an evenly spaced grid to produce the points a plotting host draws.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::FormulaError,
    interpreter::{
        formula::Formula,
        sampler::{Point, SampleGrid},
    },
};

/// Defines the shape of a parsed formula.
///
/// This module declares the operator set, the `Node` enum stored in the arena
/// and the handles that link nodes together.
///
/// # Responsibilities
/// - Binds each operator to its keyword and its number of operands.
/// - Models numbers, the free variable and operator applications as nodes.
/// - Prints trees back in prefix form.
pub mod ast;
/// Provides the error types for lexing, parsing and evaluation.
///
/// Lexing and parsing errors describe invalid formulas and are meant to be
/// shown to the user. Evaluation errors describe internal inconsistencies.
pub mod error;
/// Orchestrates the path from text to plotted points.
///
/// Ties together the lexer, the arena, the parser, the evaluator and the
/// sampler.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses `source` into a formula ready to be evaluated.
///
/// # Errors
/// Returns an error if the text cannot be tokenized or parsed.
///
/// # Examples
/// ```
/// use grapher::load_formula;
///
/// let formula = load_formula("(cos (* x 2))").unwrap();
/// assert_eq!(formula.evaluate(0.0).unwrap(), 1.0);
///
/// // `+` needs two operands.
/// assert!(load_formula("(+ x)").is_err());
/// ```
pub fn load_formula(source: &str) -> Result<Formula, FormulaError> {
    Formula::parse(source)
}

/// Parses `source` and samples it over `grid` in one call.
///
/// # Errors
/// Returns an error if the formula is invalid or evaluation fails.
///
/// # Examples
/// ```
/// use grapher::{interpreter::sampler::SampleGrid, sample_formula};
///
/// let points = sample_formula("(* x x)", SampleGrid::default()).unwrap();
/// assert_eq!(points.len(), 4000);
/// ```
pub fn sample_formula(source: &str,
                      grid: SampleGrid)
                      -> Result<Vec<Point>, Box<dyn std::error::Error>> {
    let formula = load_formula(source)?;
    Ok(formula.sample(grid)?)
}

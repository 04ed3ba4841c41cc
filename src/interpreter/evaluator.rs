/// Core evaluation logic.
///
/// The depth-first walk that maps a tree and an input value to a number.
pub mod core;

/// Operator application.
///
/// Applies each operator to already evaluated operands and rejects nodes whose
/// shape does not match the operator's arity.
pub mod operator;

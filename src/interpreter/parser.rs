/// Core parsing entry points.
///
/// Contains [`core::parse`], which turns a whole token sequence into a tree,
/// and [`core::parse_expression`], the recursive descent over the prefix
/// grammar.
pub mod core;
/// Parsing utilities.
///
/// Token lookup and the "expect this token here" checks shared by the
/// recursive descent.
pub mod utils;

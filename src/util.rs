/// Numeric conversion helpers.
///
/// Conversions between integer and floating-point types that refuse to lose
/// information silently. Use these whenever an integer must become an `f64`.
pub mod num;

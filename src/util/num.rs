/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns the error produced by `error` if the value exceeds
/// `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use grapher::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(1234, || "too big"), Ok(1234.0));
/// assert_eq!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1, || "too big"), Err("too big"));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked<E>(value: u64, error: impl FnOnce() -> E) -> Result<f64, E> {
    if value > MAX_SAFE_U64_INT {
        return Err(error());
    }

    Ok(value as f64)
}

/// Appends one decimal digit to an accumulated value, most significant digit
/// first.
///
/// Returns `None` if `digit` is not a decimal digit or the result overflows.
///
/// ## Example
/// ```
/// use grapher::util::num::push_decimal_digit;
///
/// assert_eq!(push_decimal_digit(1, '2'), Some(12));
/// assert_eq!(push_decimal_digit(0, 'x'), None);
/// assert_eq!(push_decimal_digit(u64::MAX, '0'), None);
/// ```
#[must_use]
pub fn push_decimal_digit(accumulated: u64, digit: char) -> Option<u64> {
    let digit = digit.to_digit(10)?;
    accumulated.checked_mul(10)?.checked_add(u64::from(digit))
}

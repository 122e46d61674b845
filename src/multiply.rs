/// The product of two integers and an optional third factor.
///
/// An absent third factor defaults to `1`, the multiplicative identity, so a
/// two-factor call is spelled `multiply(x, y, None)`. A separate two-integer
/// function is deliberately not provided: the defaulted factor already covers
/// that call shape, and two same-name forms differing only in a defaulted
/// trailing argument could not be told apart at a two-argument call site.
///
/// # Examples
///
/// ```
/// use utilfam::multiply::multiply;
///
/// assert_eq!(multiply(4, 15, Some(7)), 420);
/// assert_eq!(multiply(4, 15, None), 60);
/// ```
pub fn multiply(x: i32, y: i32, z: Option<i32>) -> i32 {
    x * y * z.unwrap_or(1)
}

/// The product of two floating-point numbers.
pub fn multiply_floats(x: f64, y: f64) -> f64 {
    x * y
}

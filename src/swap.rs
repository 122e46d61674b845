/// Exchange the values behind two mutable references.
///
/// Both caller-visible bindings are mutated; applying the exchange twice
/// restores the original values. Works for any value type, so integers and
/// [`Coordinate`](crate::types::Coordinate)s share this one contract.
pub fn exchange<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}

/// Exchange through optional handles.
///
/// The guarded variant of [`exchange`]: when either handle is absent the
/// exchange is skipped and neither value changes. Returns whether the
/// exchange ran.
pub fn try_exchange<T>(a: Option<&mut T>, b: Option<&mut T>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            std::mem::swap(a, b);
            true
        }
        _ => false,
    }
}

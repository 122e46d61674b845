use crate::types::IntArray;

/// The larger of two integers.
///
/// Integers are totally ordered, so there is no failure mode; equal arguments
/// return that shared value.
pub fn max_of_two(x: i32, y: i32) -> i32 {
    if x > y { x } else { y }
}

/// The largest of three integers, as a pairwise reduction over [`max_of_two`].
pub fn max_of_three(x: i32, y: i32, z: i32) -> i32 {
    max_of_two(max_of_two(x, y), z)
}

/// The largest element of a fixed-length array.
///
/// Linear scan with the first element as the initial candidate, so the result
/// is always an element of the array.
pub fn max_of_array(values: &IntArray) -> i32 {
    let mut best = values[0];
    for &value in &values[1..] {
        if value > best {
            best = value;
        }
    }
    best
}

/// The largest element across two fixed-length arrays.
///
/// Each array's maximum is computed separately, then the two are combined
/// with [`max_of_two`].
pub fn max_of_arrays(first: &IntArray, second: &IntArray) -> i32 {
    max_of_two(max_of_array(first), max_of_array(second))
}

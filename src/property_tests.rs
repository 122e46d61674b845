//! Property-based tests for the function families.
//!
//! Uses proptest to verify the documented contracts across randomly
//! generated inputs.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::maximum::{max_of_array, max_of_arrays, max_of_three, max_of_two};
    use crate::multiply::multiply;
    use crate::swap::{exchange, try_exchange};
    use crate::types::{Coordinate, IntArray};

    proptest! {
        /// The maximum of two integers is one of them and not less than either.
        #[test]
        fn prop_max_of_two_membership(a in any::<i32>(), b in any::<i32>()) {
            let result = max_of_two(a, b);
            prop_assert!(result == a || result == b);
            prop_assert!(result >= a && result >= b);
        }

        /// Argument order never changes the maximum.
        #[test]
        fn prop_max_of_two_commutes(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(max_of_two(a, b), max_of_two(b, a));
        }

        /// The three-way maximum bounds every argument and is one of them.
        #[test]
        fn prop_max_of_three_bounds_every_argument(
            a in any::<i32>(),
            b in any::<i32>(),
            c in any::<i32>(),
        ) {
            let result = max_of_three(a, b, c);
            prop_assert!(result >= a && result >= b && result >= c);
            prop_assert!(result == a || result == b || result == c);
        }

        /// The scan agrees with the iterator maximum.
        #[test]
        fn prop_max_of_array_matches_iterator_max(values in any::<IntArray>()) {
            let expected = values.iter().copied().max().unwrap();
            prop_assert_eq!(max_of_array(&values), expected);
        }

        /// Rotating the array never changes its maximum.
        #[test]
        fn prop_max_of_array_is_position_independent(
            values in any::<IntArray>(),
            shift in 0usize..5,
        ) {
            let mut rotated = values;
            rotated.rotate_left(shift);
            prop_assert_eq!(max_of_array(&rotated), max_of_array(&values));
        }

        /// The two-array maximum equals the maximum over both arrays' elements.
        #[test]
        fn prop_max_of_arrays_covers_both_sides(
            first in any::<IntArray>(),
            second in any::<IntArray>(),
        ) {
            let expected = first.iter().chain(second.iter()).copied().max().unwrap();
            prop_assert_eq!(max_of_arrays(&first, &second), expected);
        }

        /// Exchanging twice restores the original values.
        #[test]
        fn prop_exchange_twice_restores(a in any::<i32>(), b in any::<i32>()) {
            let (mut x, mut y) = (a, b);
            exchange(&mut x, &mut y);
            prop_assert_eq!((x, y), (b, a));
            exchange(&mut x, &mut y);
            prop_assert_eq!((x, y), (a, b));
        }

        /// Coordinates exchange both fields at once.
        #[test]
        fn prop_exchange_moves_coordinates_whole(
            lat1 in -90.0f64..90.0,
            lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lon2 in -180.0f64..180.0,
        ) {
            let mut first = Coordinate::new(lat1, lon1);
            let mut second = Coordinate::new(lat2, lon2);
            exchange(&mut first, &mut second);
            prop_assert_eq!(first, Coordinate::new(lat2, lon2));
            prop_assert_eq!(second, Coordinate::new(lat1, lon1));
        }

        /// An absent handle always leaves both values untouched.
        #[test]
        fn prop_try_exchange_guards_absent_handles(
            a in any::<i32>(),
            b in any::<i32>(),
            drop_first in any::<bool>(),
        ) {
            let (mut x, mut y) = (a, b);
            let ran = if drop_first {
                try_exchange(None, Some(&mut y))
            } else {
                try_exchange(Some(&mut x), None)
            };
            prop_assert!(!ran);
            prop_assert_eq!((x, y), (a, b));
        }

        /// An absent third factor multiplies by the identity.
        #[test]
        fn prop_multiply_defaults_to_identity(x in -1000i32..1000, y in -1000i32..1000) {
            prop_assert_eq!(multiply(x, y, None), multiply(x, y, Some(1)));
            prop_assert_eq!(multiply(x, y, None), x * y);
        }
    }
}

use tracing::debug;

use crate::maximum::{max_of_array, max_of_arrays, max_of_three, max_of_two};
use crate::multiply::{multiply, multiply_floats};
use crate::swap::{exchange, try_exchange};
use crate::types::{Coordinate, DemoEntry, DemoSection, Family, IntArray};

/// Demonstrate the `maximum` family on the worked example values.
pub fn maximum_section() -> DemoSection {
    let array_one: IntArray = [10, 2, 30, 4, 51];
    let array_two: IntArray = [8, 70, 16, 15, 41];

    let entries = vec![
        result_entry("max_of_two(9, 7)", max_of_two(9, 7), None),
        result_entry("max_of_three(9, 15, 71)", max_of_three(9, 15, 71), None),
        result_entry(
            "max_of_array(&[10, 2, 30, 4, 51])",
            max_of_array(&array_one),
            None,
        ),
        result_entry(
            "max_of_arrays(&[10, 2, 30, 4, 51], &[8, 70, 16, 15, 41])",
            max_of_arrays(&array_one, &array_two),
            None,
        ),
    ];

    DemoSection {
        family: Family::Maximum,
        entries,
    }
}

/// Demonstrate the `swap` family on the worked example values.
///
/// State carries over between entries: each pair is exchanged through the
/// optional-handle path first and back through the `&mut` path, so the
/// section ends where it began. A final entry shows the guarded no-op for an
/// absent handle.
pub fn swap_section() -> DemoSection {
    let mut entries = Vec::new();

    let mut num1 = 12;
    let mut num2 = 51;

    let before = int_state(num1, num2);
    try_exchange(Some(&mut num1), Some(&mut num2));
    entries.push(mutation_entry(
        "try_exchange(Some(&mut num1), Some(&mut num2))",
        before,
        int_state(num1, num2),
        None,
    ));

    let before = int_state(num1, num2);
    exchange(&mut num1, &mut num2);
    entries.push(mutation_entry(
        "exchange(&mut num1, &mut num2)",
        before,
        int_state(num1, num2),
        None,
    ));

    let mut location1 = Coordinate::new(25.0, 40.0);
    let mut location2 = Coordinate::new(50.0, 80.0);

    let before = coordinate_state(&location1, &location2);
    try_exchange(Some(&mut location1), Some(&mut location2));
    entries.push(mutation_entry(
        "try_exchange(Some(&mut location1), Some(&mut location2))",
        before,
        coordinate_state(&location1, &location2),
        None,
    ));

    let before = coordinate_state(&location1, &location2);
    exchange(&mut location1, &mut location2);
    entries.push(mutation_entry(
        "exchange(&mut location1, &mut location2)",
        before,
        coordinate_state(&location1, &location2),
        None,
    ));

    let before = int_state(num1, num2);
    let ran = try_exchange(Some(&mut num1), None);
    entries.push(mutation_entry(
        "try_exchange(Some(&mut num1), None)",
        before,
        int_state(num1, num2),
        Some(format!(
            "returned {ran}: an absent handle makes the exchange a no-op"
        )),
    ));

    DemoSection {
        family: Family::Swap,
        entries,
    }
}

/// Demonstrate the `multiply` family on the worked example values.
pub fn multiply_section() -> DemoSection {
    let entries = vec![
        result_entry("multiply(4, 15, Some(7))", multiply(4, 15, Some(7)), None),
        result_entry(
            "multiply(4, 15, None)",
            multiply(4, 15, None),
            Some("the third factor defaults to 1".to_string()),
        ),
        result_entry(
            "multiply_floats(0.5, 4.5)",
            multiply_floats(0.5, 4.5),
            None,
        ),
    ];

    DemoSection {
        family: Family::Multiply,
        entries,
    }
}

fn result_entry(call: &str, outcome: impl std::fmt::Display, note: Option<String>) -> DemoEntry {
    let outcome = outcome.to_string();
    debug!("{} -> {}", call, outcome);
    DemoEntry {
        call: call.to_string(),
        before: None,
        outcome,
        note,
    }
}

fn mutation_entry(call: &str, before: String, after: String, note: Option<String>) -> DemoEntry {
    debug!("{}: {} -> {}", call, before, after);
    DemoEntry {
        call: call.to_string(),
        before: Some(before),
        outcome: after,
        note,
    }
}

fn int_state(num1: i32, num2: i32) -> String {
    format!("num1 = {num1}, num2 = {num2}")
}

fn coordinate_state(location1: &Coordinate, location2: &Coordinate) -> String {
    format!("location1 = {location1}, location2 = {location2}")
}

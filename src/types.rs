use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Fixed length of every integer array the `maximum` family accepts.
pub const ARRAY_LENGTH: usize = 5;

/// An ordered sequence of exactly [`ARRAY_LENGTH`] integers.
///
/// The length is part of the type, so an operation taking `&IntArray` can
/// never be handed a sequence of the wrong size, and no dynamic resizing
/// exists to violate it.
pub type IntArray = [i32; ARRAY_LENGTH];

/// A geographic latitude/longitude pair.
///
/// A plain value type: both fields are simultaneously readable and writable,
/// and values are passed by copy or by `&mut` within a single call stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A demonstration family, named after the operation it exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Maximum,
    Swap,
    Multiply,
}

impl Family {
    /// Every family, in presentation order.
    pub const ALL: [Family; 3] = [Family::Maximum, Family::Swap, Family::Multiply];

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Maximum => "maximum",
            Family::Swap => "swap",
            Family::Multiply => "multiply",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A family name the driver does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown family `{0}`, expected one of: maximum, swap, multiply")]
pub struct UnknownFamily(pub String);

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maximum" => Ok(Family::Maximum),
            "swap" => Ok(Family::Swap),
            "multiply" => Ok(Family::Multiply),
            other => Err(UnknownFamily(other.to_string())),
        }
    }
}

/// A single demonstrated call and its observable outcome.
#[derive(Debug, Clone, Serialize)]
pub struct DemoEntry {
    /// The call as it would appear at a call site, e.g. `max_of_two(9, 7)`.
    pub call: String,
    /// Caller-visible state before the call, for in-place operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// The returned value, or the caller-visible state after the call.
    pub outcome: String,
    /// Optional note about the contract the call demonstrates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl std::fmt::Display for DemoEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.call)?;
        match &self.before {
            Some(before) => {
                write!(f, "\n --> before: {before}")?;
                write!(f, "\n --> after:  {}", self.outcome)?;
            }
            None => {
                write!(f, "\n --> result: {}", self.outcome)?;
            }
        }
        if let Some(note) = &self.note {
            write!(f, "\n   = note: {note}")?;
        }
        Ok(())
    }
}

/// All demonstrated calls for one family.
#[derive(Debug, Clone, Serialize)]
pub struct DemoSection {
    pub family: Family,
    pub entries: Vec<DemoEntry>,
}

/// Result of running the demonstration families.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub sections: Vec<DemoSection>,
}

impl DemoReport {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// The families present in the report, in section order.
    pub fn families(&self) -> Vec<Family> {
        self.sections.iter().map(|s| s.family).collect()
    }
}

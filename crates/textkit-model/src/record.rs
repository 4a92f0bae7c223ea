//! Result records produced by the computation stage of each utility.
//!
//! Records are built once per run, rendered to the console and to the
//! utility's fixed-name output file, and then discarded. Nothing reads
//! them back; the serde derives exist for machine consumers and tests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mode of a sample, with an explicit sentinel for ties.
///
/// When more than one value attains the maximum frequency the mode is
/// reported as "#N/A" rather than an arbitrary pick. The tie case where
/// every value is equally frequent also yields the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Mode {
    Value(f64),
    NotApplicable,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Value(value) => write!(f, "{value}"),
            Mode::NotApplicable => write!(f, "#N/A"),
        }
    }
}

/// Descriptive statistics for one numeric sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    /// Sample variance (n - 1 denominator), 0 for fewer than two points.
    pub variance: f64,
    pub std_deviation: f64,
}

/// One converted number: the original value and its manual base renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub number: u128,
    pub binary: String,
    pub hexadecimal: String,
}

/// One row of the word-frequency report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

//! Plain-text report formats.
//!
//! These strings are the exact bytes written to the fixed-name output
//! files. The statistics report ends with a newline; the two tabular
//! reports are newline-joined without a trailing newline.

use textkit_model::{Conversion, StatisticsSummary, WordFrequency};

pub fn statistics_report(summary: &StatisticsSummary, elapsed_seconds: f64) -> String {
    format!(
        "Mean: {}\nMedian: {}\nMode: {}\nVariance: {}\nStandard Deviation: {}\nElapsed Time: {} seconds\n",
        summary.mean,
        summary.median,
        summary.mode,
        summary.variance,
        summary.std_deviation,
        elapsed_seconds,
    )
}

pub fn conversion_report(conversions: &[Conversion], elapsed_seconds: f64) -> String {
    let mut lines = vec!["NUM | BIN | HEX".to_string()];
    for conversion in conversions {
        lines.push(format!(
            "{} | {} | {}",
            conversion.number, conversion.binary, conversion.hexadecimal
        ));
    }
    lines.push(format!("Elapsed Time: {elapsed_seconds} seconds"));
    lines.join("\n")
}

pub fn word_count_report(frequencies: &[WordFrequency], elapsed_seconds: f64) -> String {
    let mut lines = vec!["WORD | FREQ".to_string()];
    for row in frequencies {
        lines.push(format!("{} | {}", row.word, row.count));
    }
    lines.push(format!("Elapsed Time: {elapsed_seconds} seconds"));
    lines.join("\n")
}

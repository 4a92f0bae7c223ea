//! One run function per utility, wiring ingest → core → report.
//!
//! Each run takes the input path and a report sink, so the whole
//! pipeline is testable without touching the real fixed-name output
//! files. Error policy differs per utility on purpose:
//!
//! - `run_statistics` is fail-fast: a missing file or a post-filter
//!   parse error ends the run before any output is written.
//! - `run_conversion` skips bad lines and fails only when the input
//!   file itself cannot be read.
//! - `run_word_count` reports read failures with a cause-specific
//!   message and still writes its (possibly empty) report.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, error, info};

use textkit_core::{convert_all, sorted_frequencies, summarize, tally};
use textkit_ingest::{alphabetic_words, digit_lines, numeric_samples, read_text};
use textkit_report::{
    ReportSink, conversion_report, conversion_table, statistics_report, statistics_table,
    word_count_report, word_count_table,
};

/// Compute descriptive statistics for the numbers in `filename`.
///
/// Elapsed time spans ingestion and computation; reporting is excluded.
pub fn run_statistics(filename: &Path, sink: &mut dyn ReportSink) -> Result<()> {
    let start = Instant::now();
    let text = read_text(filename)?;
    let samples = numeric_samples(&text)?;
    let summary = summarize(&samples);
    let elapsed = start.elapsed().as_secs_f64();
    info!(samples = samples.len(), "statistics computed");

    println!("{}", statistics_table(&summary));
    println!("Elapsed Time: {elapsed} seconds");
    sink.write_report(&statistics_report(&summary, elapsed))?;
    Ok(())
}

/// Convert the numbers in `filename` to binary and hexadecimal.
///
/// Elapsed time spans read and conversion; reporting is excluded.
pub fn run_conversion(filename: &Path, sink: &mut dyn ReportSink) -> Result<()> {
    let start = Instant::now();
    let text = read_text(filename)?;
    let numbers = digit_lines(&text);
    let conversions = convert_all(&numbers);
    let elapsed = start.elapsed().as_secs_f64();
    debug!(converted = conversions.len(), "conversion complete");

    println!("{}", conversion_table(&conversions));
    println!("Elapsed Time: {elapsed} seconds");
    sink.write_report(&conversion_report(&conversions, elapsed))?;
    Ok(())
}

/// Count word frequencies in `filename`.
///
/// A read failure is reported but does not end the run; an empty tally
/// is rendered and written instead. Elapsed time covers the whole
/// counting phase.
pub fn run_word_count(filename: &Path, sink: &mut dyn ReportSink) -> Result<()> {
    let start = Instant::now();
    let words = match read_text(filename) {
        Ok(text) => alphabetic_words(&text),
        Err(cause) => {
            error!("{cause}");
            Vec::new()
        }
    };
    let counts = tally(words);
    let elapsed = start.elapsed().as_secs_f64();
    let frequencies = sorted_frequencies(&counts);
    info!(distinct_words = frequencies.len(), "word count complete");

    println!("{}", word_count_table(&frequencies));
    println!("Elapsed Time: {elapsed} seconds");
    sink.write_report(&word_count_report(&frequencies, elapsed))?;
    Ok(())
}

//! Descriptive statistics over a numeric sample set.
//!
//! All functions tolerate an empty sample: mean, median, variance and
//! standard deviation are defined as 0 and the mode is the "#N/A"
//! sentinel, so an empty input file produces a complete report instead
//! of a division-by-zero failure.

use std::collections::HashMap;

use ordered_float::OrderedFloat;

use textkit_model::{Mode, StatisticsSummary};

/// Arithmetic mean, 0 for an empty sample.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Median: the central element of the sorted sample, or the average of
/// the two central elements for an even count. 0 for an empty sample.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let midpoint = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[midpoint - 1] + sorted[midpoint]) / 2.0
    } else {
        sorted[midpoint]
    }
}

/// Mode via a frequency map over the sample values.
///
/// Returns the value with the unique maximum frequency, or
/// [`Mode::NotApplicable`] when several values tie for the maximum
/// (including the case where every value is equally frequent) or the
/// sample is empty.
pub fn mode(data: &[f64]) -> Mode {
    let mut frequency: HashMap<OrderedFloat<f64>, usize> = HashMap::new();
    for &value in data {
        *frequency.entry(OrderedFloat(value)).or_insert(0) += 1;
    }
    let Some(&max_frequency) = frequency.values().max() else {
        return Mode::NotApplicable;
    };
    let mut modes = frequency
        .iter()
        .filter(|&(_, &count)| count == max_frequency)
        .map(|(&value, _)| value.into_inner());
    match (modes.next(), modes.next()) {
        (Some(value), None) => Mode::Value(value),
        _ => Mode::NotApplicable,
    }
}

/// Sample variance (n - 1 denominator), 0 for fewer than two points.
pub fn variance(data: &[f64], mean: f64) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let sum_of_squares: f64 = data.iter().map(|value| (value - mean).powi(2)).sum();
    sum_of_squares / (data.len() - 1) as f64
}

/// Compute the full summary for one sample set.
pub fn summarize(data: &[f64]) -> StatisticsSummary {
    let mean = mean(data);
    let variance = variance(data, mean);
    StatisticsSummary {
        mean,
        median: median(data),
        mode: mode(data),
        variance,
        std_deviation: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_yields_zeroes_and_na_mode() {
        let summary = summarize(&[]);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.median, 0.0);
        assert_eq!(summary.mode, Mode::NotApplicable);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std_deviation, 0.0);
    }

    #[test]
    fn median_averages_central_pair_for_even_counts() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    }

    #[test]
    fn mode_is_na_when_maximum_frequency_ties() {
        assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]), Mode::NotApplicable);
        assert_eq!(mode(&[1.0, 1.0, 2.0]), Mode::Value(1.0));
        assert_eq!(mode(&[2.0, 2.0, 2.0, 2.0]), Mode::Value(2.0));
    }

    #[test]
    fn constant_sample_has_zero_spread() {
        let summary = summarize(&[2.0, 2.0, 2.0, 2.0]);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std_deviation, 0.0);
        assert_eq!(summary.mean, 2.0);
    }

    #[test]
    fn sample_variance_uses_n_minus_one() {
        // [1, 2, 3, 4]: mean 2.5, squared deviations sum to 5.0
        let data = [1.0, 2.0, 3.0, 4.0];
        let variance = variance(&data, mean(&data));
        assert!((variance - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn single_point_has_zero_variance() {
        assert_eq!(variance(&[5.0], 5.0), 0.0);
    }
}

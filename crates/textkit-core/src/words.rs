//! Word-frequency tally and its sorted report view.

use std::collections::HashMap;

use textkit_model::WordFrequency;

/// Count occurrences of each distinct word.
///
/// The caller is expected to have lowercased and filtered the tokens;
/// this function counts whatever it is given.
pub fn tally<I>(words: I) -> HashMap<String, u64>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = HashMap::new();
    for word in words {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Sorted view of a tally: descending frequency, then ascending word.
///
/// The alphabetical secondary key makes equal-frequency ordering
/// deterministic.
pub fn sorted_frequencies(counts: &HashMap<String, u64>) -> Vec<WordFrequency> {
    let mut rows: Vec<WordFrequency> = counts
        .iter()
        .map(|(word, &count)| WordFrequency {
            word: word.clone(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    rows
}

pub mod convert;
pub mod stats;
pub mod words;

pub use convert::{convert_all, to_binary, to_hexadecimal};
pub use stats::summarize;
pub use words::{sorted_frequencies, tally};

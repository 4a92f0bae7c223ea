pub mod filter;
pub mod reader;

pub use filter::{is_all_digits, is_alphabetic_word, is_loose_numeric};
pub use reader::{alphabetic_words, digit_lines, numeric_samples, read_text};

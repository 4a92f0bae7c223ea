//! Token filters shared by the three utilities.
//!
//! Each filter is deliberately narrow. The loose numeric filter admits
//! only non-negative decimals (no sign, no exponent); the digit filter
//! admits only bare integers. These are intentional narrowings, not
//! general numeric parsers.

/// True if `token`, after removing at most one decimal point, is
/// non-empty and all ASCII digits.
///
/// Admits "42", "3.14", "5." and ".5"; rejects "", ".", "-1", "1e3"
/// and anything with a second decimal point.
pub fn is_loose_numeric(token: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for ch in token.chars() {
        if ch == '.' {
            dots += 1;
        } else if ch.is_ascii_digit() {
            digits += 1;
        } else {
            return false;
        }
    }
    digits > 0 && dots <= 1
}

/// True if `token` is non-empty and every character is an ASCII digit.
pub fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_digit())
}

/// True if `token` is non-empty and every character is alphabetic.
pub fn is_alphabetic_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

//! Manual base conversion by repeated division and remainder.
//!
//! The conversions are implemented from first principles on purpose; do
//! not replace them with the standard formatting machinery.

use textkit_model::Conversion;

const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Binary rendering of `number`, most-significant digit first. 0 → "0".
pub fn to_binary(mut number: u128) -> String {
    let mut digits = Vec::new();
    while number > 0 {
        digits.push(if number % 2 == 0 { '0' } else { '1' });
        number /= 2;
    }
    if digits.is_empty() {
        return "0".to_string();
    }
    digits.iter().rev().collect()
}

/// Uppercase hexadecimal rendering of `number`. 0 → "0".
pub fn to_hexadecimal(mut number: u128) -> String {
    let mut digits = Vec::new();
    while number > 0 {
        digits.push(HEX_DIGITS[(number % 16) as usize]);
        number /= 16;
    }
    if digits.is_empty() {
        return "0".to_string();
    }
    digits.iter().rev().collect()
}

/// Convert every number, preserving input order.
pub fn convert_all(numbers: &[u128]) -> Vec<Conversion> {
    numbers
        .iter()
        .map(|&number| Conversion {
            number,
            binary: to_binary(number),
            hexadecimal: to_hexadecimal(number),
        })
        .collect()
}

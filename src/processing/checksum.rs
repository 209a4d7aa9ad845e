use crate::utils::{permitted_list, MrzError};

/// Symbols with a numeric value; the value of a symbol is its index.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Padding character. Carries no value and does not consume a weight.
pub const FILLER: char = '<';

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Numeric value of a single MRZ symbol (0-35).
pub fn char_value(c: char) -> Result<u32, MrzError> {
    ALPHABET
        .find(c)
        .map(|index| index as u32)
        .ok_or_else(|| MrzError::InvalidCharacter {
            field: "Check digit input",
            character: c,
            permitted: permitted_list(ALPHABET),
        })
}

/// Weight for the `position`-th non-filler character.
pub fn weight(position: usize) -> u32 {
    WEIGHTS[position % WEIGHTS.len()]
}

/// Computes the ICAO 9303 check digit of `text`.
///
/// Fillers are skipped without advancing the weight cycle. Any other
/// character outside [`ALPHABET`] aborts the computation.
pub fn compute_check_digit(text: &str) -> Result<u8, MrzError> {
    let mut sum = 0;
    for (position, c) in text.chars().filter(|&c| c != FILLER).enumerate() {
        sum += (char_value(c)? * weight(position)) % 10;
    }
    Ok((sum % 10) as u8)
}

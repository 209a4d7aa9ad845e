use rand::Rng;
use std::fmt;

use crate::utils::{permitted_list, MrzError};
use crate::validation::authority::RESTRICTED_ALPHABET;

const LENGTH: usize = 5;

/// Five character serial number assigned by the issuing authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNumber(String);

impl DocumentNumber {
    pub fn new(number: &str) -> Result<Self, MrzError> {
        let length = number.chars().count();
        if length != LENGTH {
            return Err(MrzError::InvalidLength {
                field: "Document number",
                expected: LENGTH,
                actual: length,
            });
        }

        if let Some(illegal) = number.chars().find(|&c| !RESTRICTED_ALPHABET.contains(c)) {
            return Err(MrzError::InvalidCharacter {
                field: "Document number",
                character: illegal,
                permitted: permitted_list(RESTRICTED_ALPHABET),
            });
        }

        Ok(DocumentNumber(number.to_string()))
    }

    /// Syntactically valid number; not necessarily one that was ever issued.
    pub fn generate_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let alphabet = RESTRICTED_ALPHABET.as_bytes();
        let number = (0..LENGTH)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect();
        DocumentNumber(number)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

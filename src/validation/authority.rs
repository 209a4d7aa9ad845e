use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::utils::{permitted_list, MrzError};

/// Characters allowed in authority codes and document numbers.
/// Letters that are easily confused with digits or each other are left out.
pub const RESTRICTED_ALPHABET: &str = "0123456789CFGHJKLMNPRTVWXYZ";

const ALLOWED_FIRST_CHARACTERS: &str = "LMNPRTVWXY";

const LENGTH: usize = 4;

const KNOWN_AUTHORITY_CODES: [&str; 10] = [
    "L01X", // Köln
    "L2CJ", // Emden
    "L353", // Sulzbach/Saar
    "L6Z8", // Oberhausen
    "L72G", // Schwalmtal
    "L73Y", // Bonn
    "L79V", // Sankt Augustin
    "L7TH", // Iserlohn
    "L88N", // Heidenheim
    "L933", // Freiburg im Breisgau
];

/// Four character code of the authority that issued the document number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityCode(String);

impl AuthorityCode {
    pub fn new(code: &str) -> Result<Self, MrzError> {
        let length = code.chars().count();
        if length != LENGTH {
            return Err(MrzError::InvalidLength {
                field: "Authority code",
                expected: LENGTH,
                actual: length,
            });
        }

        if let Some(first) = code.chars().next() {
            if !ALLOWED_FIRST_CHARACTERS.contains(first) {
                return Err(MrzError::InvalidFirstCharacter {
                    character: first,
                    permitted: permitted_list(ALLOWED_FIRST_CHARACTERS),
                });
            }
        }

        if let Some(illegal) = code.chars().find(|&c| !RESTRICTED_ALPHABET.contains(c)) {
            return Err(MrzError::InvalidCharacter {
                field: "Authority code",
                character: illegal,
                permitted: permitted_list(RESTRICTED_ALPHABET),
            });
        }

        Ok(AuthorityCode(code.to_string()))
    }

    /// Picks one of the real-world authority codes at random.
    pub fn generate_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = KNOWN_AUTHORITY_CODES
            .choose(rng)
            .copied()
            .unwrap_or(KNOWN_AUTHORITY_CODES[0]);
        AuthorityCode(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorityCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

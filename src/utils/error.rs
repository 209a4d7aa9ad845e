use thiserror::Error;

#[derive(Debug, Error)]
pub enum MrzError {
    #[error("{field} \"{character}\" is not a valid character. Permitted characters: {permitted}.")]
    InvalidCharacter {
        field: &'static str,
        character: char,
        permitted: String,
    },

    #[error("{field} must be {expected} characters long, got {actual}.")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Authority code must begin with either {permitted}, got \"{character}\".")]
    InvalidFirstCharacter { character: char, permitted: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Malformed MRZ: {0}")]
    MalformedMrz(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Lists the characters of an alphabet the way error messages show them: `A, B, C`.
pub fn permitted_list(alphabet: &str) -> String {
    alphabet
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

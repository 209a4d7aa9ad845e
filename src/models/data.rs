use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentFormat {
    TD1, // ID Card (85.6mm × 54.0mm)
}

impl DocumentFormat {
    pub fn mrz_lines(&self) -> usize {
        match self {
            DocumentFormat::TD1 => 3,
        }
    }

    pub fn mrz_chars_per_line(&self) -> usize {
        match self {
            DocumentFormat::TD1 => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckDigits {
    pub document_id: u8,
    pub birth_date: u8,
    pub expiry_date: u8,
    pub composite: u8,
}

/// Structured form of a generated MRZ, as printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct MrzOutput {
    pub document_id: String,
    pub lines: [String; 3],
    pub check_digits: CheckDigits,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationIssueType {
    Structure,
    Field,
    Date,
    CheckDigit,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub is_valid: bool,
    pub structure_valid: bool,
    pub document_id_check_valid: bool,
    pub birth_date_check_valid: bool,
    pub expiry_date_check_valid: bool,
    pub composite_check_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

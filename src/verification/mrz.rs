use chrono::NaiveDate;
use log::{debug, warn};

use crate::models::{
    DocumentFormat, DocumentIdentifier, ValidationIssue, ValidationIssueType, VerificationResult,
};
use crate::mrz_generator::{name_line, DOCUMENT_CODE, ISSUING_STATE, NATIONALITY};
use crate::processing::checksum::{compute_check_digit, FILLER};
use crate::utils::MrzError;

/// Checks a TD1 machine readable zone in the layout produced by
/// [`crate::mrz_generator::MachineReadableZone`].
pub struct MrzVerifier;

impl MrzVerifier {
    pub fn new() -> Self {
        MrzVerifier
    }

    /// Verify a three line MRZ block. Trailing whitespace is ignored.
    pub fn verify(&self, text: &str) -> Result<VerificationResult, MrzError> {
        let text = text.trim_end();
        if text.is_empty() {
            return Err(MrzError::MalformedMrz("no MRZ lines found".to_string()));
        }

        let lines: Vec<&str> = text.lines().collect();
        let mut issues = Vec::new();

        // 1. Line count and width; nothing else can be located without them
        if !self.validate_shape(&lines, &mut issues) {
            warn!("MRZ rejected before field checks: {} issue(s)", issues.len());
            return Ok(VerificationResult {
                is_valid: false,
                structure_valid: false,
                document_id_check_valid: false,
                birth_date_check_valid: false,
                expiry_date_check_valid: false,
                composite_check_valid: false,
                issues,
            });
        }
        let (line1, line2, line3) = (lines[0], lines[1], lines[2]);

        // 2. Fixed constants and filler runs
        let structure_valid = self.validate_constants(line1, line2, line3, &mut issues);

        // 3. Field alphabets and dates
        self.validate_fields(line1, line2, &mut issues);

        // 4. Check digits
        let document_id_check_valid =
            self.validate_check_digit("Document number", &line1[5..14], line1, 14, &mut issues);
        let birth_date_check_valid =
            self.validate_check_digit("Birth date", &line2[0..6], line2, 6, &mut issues);
        let expiry_date_check_valid =
            self.validate_check_digit("Expiry date", &line2[8..14], line2, 14, &mut issues);

        let composite_data = format!(
            "{}{}{}{}",
            &line1[5..15],
            &line2[0..7],
            &line2[8..15],
            &line2[18..22]
        );
        let composite_check_valid =
            self.validate_check_digit("Composite", &composite_data, line2, 29, &mut issues);

        debug!("MRZ verification finished with {} issue(s)", issues.len());

        Ok(VerificationResult {
            is_valid: issues.is_empty(),
            structure_valid,
            document_id_check_valid,
            birth_date_check_valid,
            expiry_date_check_valid,
            composite_check_valid,
            issues,
        })
    }

    fn validate_shape(&self, lines: &[&str], issues: &mut Vec<ValidationIssue>) -> bool {
        let format = DocumentFormat::TD1;

        if lines.len() != format.mrz_lines() {
            issues.push(structure_issue(format!(
                "Expected {} lines, found {}",
                format.mrz_lines(),
                lines.len()
            )));
            return false;
        }

        let mut valid = true;
        for (index, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != format.mrz_chars_per_line() || !line.is_ascii() {
                valid = false;
                issues.push(structure_issue(format!(
                    "Line {} must be {} ASCII characters, found {}",
                    index + 1,
                    format.mrz_chars_per_line(),
                    width
                )));
            }
        }
        valid
    }

    fn validate_constants(
        &self,
        line1: &str,
        line2: &str,
        line3: &str,
        issues: &mut Vec<ValidationIssue>,
    ) -> bool {
        let before = issues.len();

        if &line1[0..2] != DOCUMENT_CODE {
            issues.push(structure_issue(format!(
                "Invalid document code '{}', expected '{}'",
                &line1[0..2],
                DOCUMENT_CODE
            )));
        }
        if &line1[2..3] != ISSUING_STATE {
            issues.push(structure_issue(format!(
                "Invalid issuing state '{}', expected '{}'",
                &line1[2..3],
                ISSUING_STATE
            )));
        }
        if &line2[15..16] != NATIONALITY {
            issues.push(structure_issue(format!(
                "Invalid nationality '{}', expected '{}'",
                &line2[15..16],
                NATIONALITY
            )));
        }

        let filler_runs = [
            ("line 1", &line1[3..5]),
            ("line 1", &line1[15..30]),
            ("line 2", &line2[7..8]),
            ("line 2", &line2[16..18]),
            ("line 2", &line2[22..29]),
        ];
        for (line, run) in filler_runs {
            if run.chars().any(|c| c != FILLER) {
                issues.push(structure_issue(format!(
                    "Unexpected characters '{}' in filler area of {}",
                    run, line
                )));
            }
        }

        if line3 != name_line() {
            issues.push(structure_issue(format!(
                "Unexpected name line '{}'",
                line3
            )));
        }

        issues.len() == before
    }

    fn validate_fields(&self, line1: &str, line2: &str, issues: &mut Vec<ValidationIssue>) {
        if let Err(err) = DocumentIdentifier::new(&line1[5..9], &line1[9..14]) {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Field,
                message: err.to_string(),
            });
        }

        for (field, value) in [("Birth date", &line2[0..6]), ("Expiry date", &line2[8..14])] {
            if NaiveDate::parse_from_str(value, "%y%m%d").is_err() {
                issues.push(date_issue(format!("{} '{}' is not a valid YYMMDD date", field, value)));
            }
        }

        let version = &line2[18..22];
        if NaiveDate::parse_from_str(&format!("{}01", version), "%y%m%d").is_err() {
            issues.push(date_issue(format!(
                "Version number '{}' is not a valid YYMM date",
                version
            )));
        }
    }

    fn validate_check_digit(
        &self,
        field: &str,
        data: &str,
        line: &str,
        position: usize,
        issues: &mut Vec<ValidationIssue>,
    ) -> bool {
        let printed = &line[position..position + 1];
        match compute_check_digit(data) {
            Ok(expected) if printed == expected.to_string() => true,
            Ok(expected) => {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::CheckDigit,
                    message: format!(
                        "{} check digit is '{}', expected {}",
                        field, printed, expected
                    ),
                });
                false
            }
            Err(err) => {
                issues.push(ValidationIssue {
                    issue_type: ValidationIssueType::CheckDigit,
                    message: format!("{} check digit cannot be computed: {}", field, err),
                });
                false
            }
        }
    }
}

impl Default for MrzVerifier {
    fn default() -> Self {
        Self::new()
    }
}

fn structure_issue(message: String) -> ValidationIssue {
    ValidationIssue {
        issue_type: ValidationIssueType::Structure,
        message,
    }
}

fn date_issue(message: String) -> ValidationIssue {
    ValidationIssue {
        issue_type: ValidationIssueType::Date,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "IDD<<L01X123452<<<<<<<<<<<<<<<\n\
                          9005156<3005154D<<2405<<<<<<<7\n\
                          MUSTERMANN<<ERIKA<<<<<<<<<<<<<";

    fn has_issue(result: &VerificationResult, issue_type: ValidationIssueType) -> bool {
        result.issues.iter().any(|i| i.issue_type == issue_type)
    }

    #[test]
    fn accepts_generated_sample() {
        let result = MrzVerifier::new().verify(SAMPLE).unwrap();
        assert!(result.is_valid, "{:?}", result.issues);
        assert!(result.structure_valid);
        assert!(result.composite_check_valid);
    }

    #[test]
    fn tolerates_trailing_newline() {
        let text = format!("{}\n", SAMPLE);
        assert!(MrzVerifier::new().verify(&text).unwrap().is_valid);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            MrzVerifier::new().verify("  \n"),
            Err(MrzError::MalformedMrz(_))
        ));
    }

    #[test]
    fn wrong_line_count_stops_early() {
        let text = SAMPLE.lines().take(2).collect::<Vec<_>>().join("\n");
        let result = MrzVerifier::new().verify(&text).unwrap();
        assert!(!result.is_valid);
        assert!(!result.structure_valid);
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn short_line_stops_early() {
        let text = SAMPLE.replacen("<<<<<<<7", "<<<<<<7", 1);
        let result = MrzVerifier::new().verify(&text).unwrap();
        assert!(!result.structure_valid);
        assert!(has_issue(&result, ValidationIssueType::Structure));
    }

    #[test]
    fn detects_document_number_typo() {
        let text = SAMPLE.replacen("L01X12345", "L01X12346", 1);
        let result = MrzVerifier::new().verify(&text).unwrap();
        assert!(!result.is_valid);
        assert!(!result.document_id_check_valid);
        assert!(!result.composite_check_valid);
        assert!(result.birth_date_check_valid);
        assert!(result.structure_valid);
    }

    #[test]
    fn detects_wrong_composite() {
        let text = SAMPLE.replacen("<<<<<<<7", "<<<<<<<8", 1);
        let result = MrzVerifier::new().verify(&text).unwrap();
        assert!(!result.composite_check_valid);
        assert!(result.document_id_check_valid);
        assert!(result
            .issues
            .iter()
            .any(|i| i.message == "Composite check digit is '8', expected 7"));
    }

    #[test]
    fn detects_impossible_date() {
        // 1990-13-15 with a matching check digit
        let text = SAMPLE.replacen("9005156", "9013153", 1);
        let result = MrzVerifier::new().verify(&text).unwrap();
        assert!(has_issue(&result, ValidationIssueType::Date));
        assert!(result.birth_date_check_valid);
    }

    #[test]
    fn detects_changed_constants() {
        let text = SAMPLE.replacen("IDD", "IDX", 1);
        let result = MrzVerifier::new().verify(&text).unwrap();
        assert!(!result.structure_valid);
        assert!(result.document_id_check_valid);
    }

    #[test]
    fn detects_invalid_authority_code() {
        let text = SAMPLE.replacen("L01X", "Z01X", 1);
        let result = MrzVerifier::new().verify(&text).unwrap();
        assert!(has_issue(&result, ValidationIssueType::Field));
    }
}

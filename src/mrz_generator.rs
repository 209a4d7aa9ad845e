use chrono::NaiveDate;
use log::debug;
use std::fmt;

use crate::models::{CheckDigits, DocumentFormat, DocumentIdentifier, MrzOutput};
use crate::processing::checksum::{compute_check_digit, FILLER};
use crate::processing::date::{FullDate, ShortDate};
use crate::utils::MrzError;

pub const DOCUMENT_CODE: &str = "ID";
pub const ISSUING_STATE: &str = "D";
pub const NATIONALITY: &str = "D";
pub const SURNAME: &str = "MUSTERMANN";
pub const GIVEN_NAMES: &str = "ERIKA";

fn fillers(count: usize) -> String {
    FILLER.to_string().repeat(count)
}

/// Placeholder holder name line. Never derived from input.
pub fn name_line() -> String {
    let width = DocumentFormat::TD1.mrz_chars_per_line();
    let name = format!("{}{}{}", SURNAME, fillers(2), GIVEN_NAMES);
    let padding = width.saturating_sub(name.len());
    format!("{}{}", name, fillers(padding))
}

/// Three line TD1 machine readable zone of a German ID card.
///
/// All lines and check digits are computed at construction; the value is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineReadableZone {
    document_id: DocumentIdentifier,
    birth_date: FullDate,
    expiry_date: FullDate,
    version_number: ShortDate,
    check_digits: CheckDigits,
    lines: [String; 3],
}

impl MachineReadableZone {
    pub fn new(
        authority_code: &str,
        document_number: &str,
        birth_date: NaiveDate,
        expiry_date: NaiveDate,
        issuing_date: NaiveDate,
    ) -> Result<Self, MrzError> {
        let document_id = DocumentIdentifier::new(authority_code, document_number)?;
        Self::from_parts(
            document_id,
            FullDate::new(birth_date),
            FullDate::new(expiry_date),
            ShortDate::new(issuing_date),
        )
    }

    pub fn from_parts(
        document_id: DocumentIdentifier,
        birth_date: FullDate,
        expiry_date: FullDate,
        version_number: ShortDate,
    ) -> Result<Self, MrzError> {
        let document_id_check = document_id.check_digit()?;
        let birth_date_check = birth_date.check_digit()?;
        let expiry_date_check = expiry_date.check_digit()?;

        let composite = compute_check_digit(&format!(
            "{}{}{}{}{}{}{}",
            document_id,
            document_id_check,
            birth_date,
            birth_date_check,
            expiry_date,
            expiry_date_check,
            version_number
        ))?;

        let check_digits = CheckDigits {
            document_id: document_id_check,
            birth_date: birth_date_check,
            expiry_date: expiry_date_check,
            composite,
        };
        debug!("Check digits for {}: {:?}", document_id, check_digits);

        let line1 = format!(
            "{}{}{}{}{}{}",
            DOCUMENT_CODE,
            ISSUING_STATE,
            fillers(2),
            document_id,
            check_digits.document_id,
            fillers(15)
        );

        let line2 = format!(
            "{}{}{}{}{}{}{}{}{}{}",
            birth_date,
            check_digits.birth_date,
            fillers(1),
            expiry_date,
            check_digits.expiry_date,
            NATIONALITY,
            fillers(2),
            version_number,
            fillers(7),
            check_digits.composite
        );

        Ok(MachineReadableZone {
            document_id,
            birth_date,
            expiry_date,
            version_number,
            check_digits,
            lines: [line1, line2, name_line()],
        })
    }

    pub fn document_id(&self) -> &DocumentIdentifier {
        &self.document_id
    }

    pub fn birth_date(&self) -> FullDate {
        self.birth_date
    }

    pub fn expiry_date(&self) -> FullDate {
        self.expiry_date
    }

    pub fn version_number(&self) -> ShortDate {
        self.version_number
    }

    pub fn check_digits(&self) -> CheckDigits {
        self.check_digits
    }

    pub fn lines(&self) -> &[String; 3] {
        &self.lines
    }

    pub fn to_output(&self) -> MrzOutput {
        MrzOutput {
            document_id: self.document_id.to_string(),
            lines: self.lines.clone(),
            check_digits: self.check_digits,
        }
    }
}

impl fmt::Display for MachineReadableZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Builds the newline-joined MRZ text for the given fields.
pub fn compose(
    authority_code: &str,
    document_number: &str,
    birth_date: NaiveDate,
    expiry_date: NaiveDate,
    issuing_date: NaiveDate,
) -> Result<String, MrzError> {
    MachineReadableZone::new(
        authority_code,
        document_number,
        birth_date,
        expiry_date,
        issuing_date,
    )
    .map(|mrz| mrz.to_string())
}

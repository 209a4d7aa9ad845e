use std::fmt;

use crate::processing::checksum::compute_check_digit;
use crate::utils::MrzError;
use crate::validation::{AuthorityCode, DocumentNumber};

/// Authority code followed by document number, the nine character card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIdentifier {
    authority_code: AuthorityCode,
    document_number: DocumentNumber,
}

impl DocumentIdentifier {
    pub fn new(authority_code: &str, document_number: &str) -> Result<Self, MrzError> {
        Ok(DocumentIdentifier {
            authority_code: AuthorityCode::new(authority_code)?,
            document_number: DocumentNumber::new(document_number)?,
        })
    }

    pub fn authority_code(&self) -> &AuthorityCode {
        &self.authority_code
    }

    pub fn document_number(&self) -> &DocumentNumber {
        &self.document_number
    }

    pub fn check_digit(&self) -> Result<u8, MrzError> {
        compute_check_digit(&self.to_string())
    }
}

impl fmt::Display for DocumentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.authority_code, self.document_number)
    }
}

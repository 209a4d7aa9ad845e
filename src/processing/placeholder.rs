use chrono::NaiveDate;
use rand::Rng;

use crate::processing::date::{default_expiry_date, default_issuing_date, random_birth_date};
use crate::utils::MrzError;
use crate::validation::{AuthorityCode, DocumentNumber};

/// A complete set of random but valid input values.
///
/// Used to fill any field the caller leaves empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub authority_code: AuthorityCode,
    pub document_number: DocumentNumber,
    pub birth_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub issuing_date: NaiveDate,
}

impl Placeholders {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Result<Self, MrzError> {
        Ok(Placeholders {
            authority_code: AuthorityCode::generate_random(rng),
            document_number: DocumentNumber::generate_random(rng),
            birth_date: random_birth_date(rng, today)?,
            expiry_date: default_expiry_date(today)?,
            issuing_date: default_issuing_date(today),
        })
    }
}

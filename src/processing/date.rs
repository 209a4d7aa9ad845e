use chrono::{Datelike, Days, Months, NaiveDate};
use rand::Rng;
use std::fmt;

use crate::processing::checksum::compute_check_digit;
use crate::utils::MrzError;

// Two-digit, zero-padded year (last two digits) and month.
fn year_month(date: NaiveDate) -> String {
    format!("{:02}{:02}", date.year().rem_euclid(100), date.month())
}

/// `YYMM` encoding, used for the version number on line 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortDate(NaiveDate);

impl ShortDate {
    pub fn new(date: NaiveDate) -> Self {
        ShortDate(date)
    }
}

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&year_month(self.0))
    }
}

/// `YYMMDD` encoding with its own check digit, used for birth and expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullDate(NaiveDate);

impl FullDate {
    pub fn new(date: NaiveDate) -> Self {
        FullDate(date)
    }

    pub fn check_digit(&self) -> Result<u8, MrzError> {
        compute_check_digit(&self.to_string())
    }
}

impl fmt::Display for FullDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{:02}", year_month(self.0), self.0.day())
    }
}

/// A birth date for a holder aged between 18 and 68 years on `today`.
///
/// Subtracts 18 plus 0-50 whole years, then 0-365 days.
pub fn random_birth_date<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
) -> Result<NaiveDate, MrzError> {
    let years: u32 = 18 + rng.gen_range(0..=50);
    let days: u64 = rng.gen_range(0..=365);

    today
        .checked_sub_months(Months::new(years * 12))
        .and_then(|date| date.checked_sub_days(Days::new(days)))
        .ok_or_else(|| {
            MrzError::InvalidDate(format!(
                "cannot derive a birth date {} years and {} days before {}",
                years, days, today
            ))
        })
}

/// Expiry date of a card issued on `today`: six years later.
pub fn default_expiry_date(today: NaiveDate) -> Result<NaiveDate, MrzError> {
    today
        .checked_add_months(Months::new(6 * 12))
        .ok_or_else(|| MrzError::InvalidDate(format!("no expiry date six years after {}", today)))
}

pub fn default_issuing_date(today: NaiveDate) -> NaiveDate {
    today
}

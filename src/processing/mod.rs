pub mod checksum;
pub mod date;
pub mod placeholder;

pub use checksum::{char_value, compute_check_digit, weight, ALPHABET, FILLER};
pub use date::{FullDate, ShortDate};
pub use placeholder::Placeholders;

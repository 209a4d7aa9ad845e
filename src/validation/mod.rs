pub mod authority;
pub mod number;

pub use authority::{AuthorityCode, RESTRICTED_ALPHABET};
pub use number::DocumentNumber;

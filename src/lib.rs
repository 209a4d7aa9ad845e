pub mod models;
pub mod mrz_generator;
pub mod processing;
pub mod utils;
pub mod validation;
pub mod verification;

pub use mrz_generator::{compose, MachineReadableZone};
pub use utils::MrzError;
pub use verification::MrzVerifier;

pub mod mrz;

pub use mrz::MrzVerifier;

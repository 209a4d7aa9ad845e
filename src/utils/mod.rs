pub mod error;

pub use error::{permitted_list, MrzError};

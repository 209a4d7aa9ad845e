pub mod data;
pub mod document_id;

pub use data::*;
pub use document_id::DocumentIdentifier;

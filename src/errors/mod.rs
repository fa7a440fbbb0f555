pub mod types;
pub mod classification;

pub use types::ComparatorError;
pub use classification::{ErrorClassification, ErrorKind};

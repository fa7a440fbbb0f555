pub mod cli;
pub mod compare;
pub mod config;
pub mod errors;
pub mod history;
pub mod llm;
pub mod models;
pub mod utils;

pub use compare::Comparator;
pub use config::ComparatorConfig;
pub use errors::ComparatorError;
pub use history::{History, HistoryStore};
pub use models::{ComparisonEntry, Prompt, Responses};

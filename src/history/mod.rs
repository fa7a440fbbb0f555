pub mod search;
pub mod store;

pub use search::search;
pub use store::{History, HistoryStore};

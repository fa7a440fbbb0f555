pub mod anthropic;
pub mod catalog;
pub mod local;
pub mod openai;
pub mod provider;
pub mod router;
pub mod types;

pub use catalog::{ModelEntry, ProviderKind, MODELS};
pub use provider::{Adapter, Invoke};
pub use router::{create_adapter, invoke, Router};

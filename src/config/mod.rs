pub mod credentials;
pub mod parser;
pub mod types;

pub use types::*;
pub use parser::{load_config, load_env_file, parse_config};

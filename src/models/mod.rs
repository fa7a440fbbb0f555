pub mod comparison;
pub mod prompt;

pub use comparison::*;
pub use prompt::Prompt;

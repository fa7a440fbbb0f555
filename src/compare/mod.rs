pub mod events;
pub mod executor;

pub use events::CompareEvent;
pub use executor::Comparator;

/// Progress notifications emitted while a comparison runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareEvent {
    /// A model is about to be queried
    ModelStarted {
        label: String,
        index: usize,
        total: usize,
    },
    /// A model returned text
    ModelCompleted {
        label: String,
        duration_ms: u64,
    },
    /// A model failed; its slot holds an error string
    ModelFailed {
        label: String,
        error: String,
    },
}

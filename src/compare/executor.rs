use std::time::Instant;

use tracing::{info, warn};

use crate::errors::ComparatorError;
use crate::llm::catalog::{self, ModelEntry};
use crate::llm::Invoke;
use crate::models::{error_response, ComparisonEntry, Prompt, Responses};
use super::events::CompareEvent;

/// Runs one prompt against a list of registry labels, one model at a time.
pub struct Comparator<I> {
    invoker: I,
}

impl<I: Invoke> Comparator<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub async fn compare<S: AsRef<str>>(
        &self,
        prompt: &Prompt,
        labels: &[S],
    ) -> Result<ComparisonEntry, ComparatorError> {
        self.compare_with_events(prompt, labels, |_| {}).await
    }

    /// Query every label in caller order. A failing model gets an error
    /// string in its slot and never stops the remaining ones.
    ///
    /// Unknown labels are rejected before any request is sent. Repeated
    /// labels are queried once, at their first position.
    pub async fn compare_with_events<S: AsRef<str>>(
        &self,
        prompt: &Prompt,
        labels: &[S],
        mut on_event: impl FnMut(CompareEvent),
    ) -> Result<ComparisonEntry, ComparatorError> {
        let entries = resolve_labels(labels)?;
        let total = entries.len();
        let mut responses = Responses::new();

        for (index, entry) in entries.into_iter().enumerate() {
            info!(label = entry.label, provider = %entry.provider, model = entry.model, "Querying model");
            on_event(CompareEvent::ModelStarted {
                label: entry.label.to_string(),
                index,
                total,
            });

            let started = Instant::now();
            let text = match self.invoker.invoke(entry, prompt.as_str()).await {
                Ok(text) => {
                    on_event(CompareEvent::ModelCompleted {
                        label: entry.label.to_string(),
                        duration_ms: started.elapsed().as_millis() as u64,
                    });
                    text
                }
                Err(e) => {
                    let class = e.classify();
                    warn!(label = entry.label, error_type = class.error_type, error = %e, "Model failed");
                    on_event(CompareEvent::ModelFailed {
                        label: entry.label.to_string(),
                        error: e.to_string(),
                    });
                    error_response(&e)
                }
            };
            responses.insert(entry.label, text);
        }

        Ok(ComparisonEntry::new(prompt.as_str(), responses))
    }
}

fn resolve_labels<S: AsRef<str>>(labels: &[S]) -> Result<Vec<&'static ModelEntry>, ComparatorError> {
    let mut entries: Vec<&'static ModelEntry> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.as_ref();
        let entry = catalog::resolve(label)
            .ok_or_else(|| ComparatorError::UnknownModel(label.to_string()))?;
        if !entries.iter().any(|e| e.label == entry.label) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

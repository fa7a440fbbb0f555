use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::compare::CompareEvent;
use crate::utils::formatting::format_duration;

/// Spinner shown on stderr while models are queried.
pub struct CompareProgress {
    bar: ProgressBar,
}

impl CompareProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(spinner) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            bar.set_style(spinner);
        }
        bar.set_message("Querying models...");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    pub fn handle_event(&self, event: &CompareEvent) {
        match event {
            CompareEvent::ModelStarted { label, index, total } => {
                self.bar.set_message(format!("Querying {} ({}/{})", label, index + 1, total));
            }
            CompareEvent::ModelCompleted { label, duration_ms } => {
                self.bar.println(format!(
                    "  {} {} ({})",
                    style("✓").green(),
                    label,
                    format_duration(*duration_ms),
                ));
            }
            CompareEvent::ModelFailed { label, .. } => {
                self.bar.println(format!("  {} {}", style("✗").red(), label));
            }
        }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

impl Default for CompareProgress {
    fn default() -> Self {
        Self::new()
    }
}

use console::style;

use crate::llm::catalog::ModelEntry;
use crate::models::{is_error_response, ComparisonEntry};
use crate::utils::truncation::preview;

const PREVIEW_CHARS: usize = 60;

/// Render one comparison: the prompt, then every model's answer in order.
pub fn render_entry(entry: &ComparisonEntry) -> String {
    let mut out = format!("{}\n{}\n", style("Prompt:").bold(), entry.prompt);
    for (label, text) in entry.responses.iter() {
        out.push_str(&render_response(label, text));
    }
    out
}

fn render_response(label: &str, text: &str) -> String {
    let body = if is_error_response(text) {
        style(text).red().to_string()
    } else if text.is_empty() {
        style("(empty response)").dim().to_string()
    } else {
        text.to_string()
    };
    format!(
        "\n{} {}\n{}\n",
        style("---").cyan().bold(),
        style(label).cyan().bold(),
        body,
    )
}

/// Numbered history listing, each entry expanded under a prompt preview.
pub fn render_history(entries: &[&ComparisonEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{} {}\n",
            style(format!("{}.", i + 1)).bold(),
            style(preview(&entry.prompt, PREVIEW_CHARS)).white().bold(),
        ));
        for (label, text) in entry.responses.iter() {
            let line = if is_error_response(text) {
                style(preview(text, PREVIEW_CHARS)).red().to_string()
            } else {
                preview(text, PREVIEW_CHARS)
            };
            out.push_str(&format!("   {} {}\n", style(format!("{}:", label)).cyan(), line));
        }
    }
    out
}

pub fn render_models(models: &[ModelEntry]) -> String {
    let width = models.iter().map(|m| m.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for m in models {
        let marker = if m.default_selected { style("*").green().to_string() } else { " ".to_string() };
        out.push_str(&format!(
            "{} {:<width$}  {:<10} {}\n",
            marker,
            m.label,
            m.provider.id(),
            style(m.model).dim(),
            width = width,
        ));
    }
    out
}

use tokio::io::AsyncReadExt;
use tracing::info;

use crate::cli::commands::CompareArgs;
use crate::cli::progress::CompareProgress;
use crate::cli::render::render_entry;
use crate::compare::Comparator;
use crate::config::ComparatorConfig;
use crate::errors::ComparatorError;
use crate::history::HistoryStore;
use crate::llm::{catalog, Router};
use crate::models::Prompt;

pub async fn handle_compare(
    args: CompareArgs,
    config: &ComparatorConfig,
    quiet: bool,
) -> Result<(), ComparatorError> {
    let text = match args.prompt.as_deref() {
        Some(p) if p != "-" => p.to_string(),
        _ => read_stdin().await?,
    };
    let prompt = Prompt::new(&text)?;
    let labels = select_labels(&args.models)?;
    info!(models = labels.len(), "Starting comparison");

    let comparator = Comparator::new(Router::new(config));
    let progress = (!quiet && !args.json).then(CompareProgress::new);
    let entry = comparator
        .compare_with_events(&prompt, &labels, |event| {
            if let Some(progress) = &progress {
                progress.handle_event(&event);
            }
        })
        .await?;
    if let Some(progress) = progress {
        progress.finish();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        print!("{}", render_entry(&entry));
    }

    if args.save {
        let store = HistoryStore::from_config(&config.history);
        store.append(entry).await?;
        if !quiet {
            eprintln!("Saved to history: {}", store.path().display());
        }
    }
    Ok(())
}

/// Map user-supplied names to registry labels, defaulting when none given.
pub fn select_labels(requested: &[String]) -> Result<Vec<&'static str>, ComparatorError> {
    if requested.is_empty() {
        return Ok(catalog::default_labels());
    }
    requested
        .iter()
        .map(|name| {
            catalog::resolve_alias(name.trim())
                .map(|entry| entry.label)
                .ok_or_else(|| ComparatorError::UnknownModel(format!(
                    "{} (run `comparator models` to list available models)",
                    name
                )))
        })
        .collect()
}

async fn read_stdin() -> Result<String, ComparatorError> {
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_defaults() {
        assert_eq!(select_labels(&[]).unwrap(), vec!["GPT-3.5-turbo (OpenAI)", "GPT-4o (OpenAI)"]);
    }

    #[test]
    fn test_select_aliases_keep_order() {
        let requested = vec!["mistral-large-latest".to_string(), "GPT-4o (OpenAI)".to_string(), "local".to_string()];
        assert_eq!(
            select_labels(&requested).unwrap(),
            vec!["Mistral-large-latest (Mistral)", "GPT-4o (OpenAI)", "Local endpoint (example)"]
        );
    }

    #[test]
    fn test_select_unknown() {
        let err = select_labels(&["llama-70b".to_string()]).unwrap_err();
        assert!(matches!(err, ComparatorError::UnknownModel(_)));
    }
}

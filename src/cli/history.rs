use crate::cli::commands::HistoryCommand;
use crate::cli::render::render_history;
use crate::config::ComparatorConfig;
use crate::errors::ComparatorError;
use crate::history::{search, HistoryStore};
use crate::models::ComparisonEntry;

pub async fn handle_history(
    command: HistoryCommand,
    config: &ComparatorConfig,
    quiet: bool,
) -> Result<(), ComparatorError> {
    let store = HistoryStore::from_config(&config.history);

    match command {
        HistoryCommand::List { json, limit } => {
            let history = store.load().await?;
            let entries: Vec<&ComparisonEntry> = history.iter().take(limit.unwrap_or(usize::MAX)).collect();
            print_entries(&entries, json, quiet, "History is empty.")
        }
        HistoryCommand::Search { query, json } => {
            let history = store.load().await?;
            let entries = search(&history, &query);
            print_entries(&entries, json, quiet, "No matching comparisons.")
        }
        HistoryCommand::Clear => {
            store.clear().await?;
            if !quiet {
                eprintln!("History cleared.");
            }
            Ok(())
        }
    }
}

fn print_entries(
    entries: &[&ComparisonEntry],
    json: bool,
    quiet: bool,
    empty_message: &str,
) -> Result<(), ComparatorError> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else if entries.is_empty() {
        if !quiet {
            eprintln!("{}", empty_message);
        }
    } else {
        print!("{}", render_history(entries));
    }
    Ok(())
}

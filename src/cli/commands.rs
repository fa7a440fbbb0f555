use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (git ",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "comparator",
    version,
    long_version = LONG_VERSION,
    about = "Send one prompt to several LLM providers and compare the answers side by side"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML configuration file (API keys, endpoints, history path)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Environment file with API keys (default: .env in the working directory or a parent)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a prompt to the selected models
    Compare(CompareArgs),
    /// List the models that can be compared
    Models(ModelsArgs),
    /// Browse, search or clear saved comparisons
    History(HistoryArgs),
    /// Show the effective configuration with keys redacted
    Config,
}

#[derive(Args, Clone)]
pub struct CompareArgs {
    /// Prompt text; read from stdin when omitted or "-"
    pub prompt: Option<String>,

    /// Model label or model id (repeatable, order is display order)
    #[arg(short, long = "model")]
    pub models: Vec<String>,

    /// Save the result to history
    #[arg(short, long)]
    pub save: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ModelsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Subcommand, Clone)]
pub enum HistoryCommand {
    /// Show saved comparisons, most recent first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Find comparisons whose prompt or responses contain QUERY (case-insensitive)
    Search {
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every saved comparison
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_long_version_carries_build_info() {
        let rendered = Cli::command().render_long_version();
        assert!(rendered.contains(env!("CARGO_PKG_VERSION")));
        assert!(rendered.contains("(git "));
        assert!(rendered.contains(", built "));
    }

    #[test]
    fn test_parse_compare_with_models() {
        let cli = Cli::try_parse_from([
            "comparator", "compare", "Hello?", "-m", "gpt-4o", "--model", "Local endpoint (example)", "--save",
        ])
        .unwrap();
        match cli.command {
            Commands::Compare(args) => {
                assert_eq!(args.prompt.as_deref(), Some("Hello?"));
                assert_eq!(args.models, vec!["gpt-4o", "Local endpoint (example)"]);
                assert!(args.save);
                assert!(!args.json);
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_parse_history_search_with_globals() {
        let cli = Cli::try_parse_from([
            "comparator", "history", "search", "abc", "-vv", "--config", "cmp.yaml", "--env-file", "keys.env",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("cmp.yaml")));
        assert_eq!(cli.env_file, Some(PathBuf::from("keys.env")));
        match cli.command {
            Commands::History(HistoryArgs { command: HistoryCommand::Search { query, json } }) => {
                assert_eq!(query, "abc");
                assert!(!json);
            }
            _ => panic!("expected history search"),
        }
    }
}

use clap::Parser;
use comparator::cli::{self, Cli, Commands};
use comparator::config;
use comparator::errors::ComparatorError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), ComparatorError> {
    let config = config::load_config(cli.config.as_deref(), cli.env_file.as_deref()).await?;

    match cli.command {
        Commands::Compare(args) => cli::compare::handle_compare(args, &config, cli.quiet).await,
        Commands::Models(args) => cli::models::handle_models(args),
        Commands::History(args) => cli::history::handle_history(args.command, &config, cli.quiet).await,
        Commands::Config => cli::config::handle_config(&config),
    }
}

mod inspect;
mod scrape;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopcat")]
#[command(about = "Scrape a storefront catalog feed into a CSV dataset")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Page through the feed and write the dataset (the default)
    Scrape,
    /// Summarize an existing dataset file
    Inspect {
        /// Number of top discounts to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = shopcat_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        None | Some(Commands::Scrape) => scrape::run_scrape(&config).await,
        Some(Commands::Inspect { top }) => inspect::run_inspect(&config.output_path, top),
    }
}

#[cfg(test)]
mod tests;

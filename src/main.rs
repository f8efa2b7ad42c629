use anyhow::Result;
use clap::Parser;
use paladar::cli::{Cli, Commands};
use paladar::config::Config;
use paladar::dataset::ReviewCorpus;
use paladar::engine::AdjectiveScale;
use paladar::Pipeline;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_init()?;

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config
            .observability
            .log_level
            .parse()
            .unwrap_or(Level::WARN)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dataset_path = cli.dataset.unwrap_or_else(|| config.dataset_path.clone());
    let decimals = cli.decimals.unwrap_or(config.display_decimals);

    let corpus = Arc::new(ReviewCorpus::load(&dataset_path)?);
    let scale = Arc::new(AdjectiveScale::stock());
    let pipeline = Pipeline::new(corpus, scale, decimals);

    match cli.command {
        Commands::Ask { question } => {
            println!("{}", pipeline.answer(&question).await?);
        }
        Commands::Rate { name } => {
            println!("{}", pipeline.rate(&name).await?);
        }
        Commands::Tools => {
            for spec in pipeline.registry().specs() {
                println!("{} - {}", spec.name, spec.description);
                println!("  parameters: {}", spec.parameters);
            }
        }
    }

    Ok(())
}

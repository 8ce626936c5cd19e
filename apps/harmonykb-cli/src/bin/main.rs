use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use harmonykb_cli::cli::{Cli, Commands};
use harmonykb_cli::commands;
use harmonykb_core::config::{expand_path, Config};
use harmonykb_core::{CsvLoader, KnowledgeBase};
use harmonykb_search::KnowledgeSearchEngine;

fn main() -> Result<()> {
    // Logs go to stderr so json output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(dir) = &cli.kb_dir {
        config.knowledge_dir = expand_path(dir.to_string_lossy());
    }
    let catalog = config.catalog()?;
    let loader = CsvLoader::new(&config.knowledge_dir);
    tracing::info!(knowledge_dir = %loader.dir().display(), categories = catalog.categories().len(), "loading knowledge base");
    let kb = KnowledgeBase::load(&loader, &catalog);
    let engine = KnowledgeSearchEngine::new(kb, catalog);

    match &cli.command {
        Commands::Search(cmd) => commands::search(cmd, &engine)?,
        Commands::DesignSystem(cmd) => commands::design_system(cmd, &engine)?,
        Commands::Status => commands::status(&engine),
    }

    Ok(())
}

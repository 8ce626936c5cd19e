use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// harmonykb - design knowledge search for HarmonyOS NEXT UI work
#[derive(Parser, Debug)]
#[command(name = "harmonykb")]
#[command(version)]
#[command(about = "Search UI design tokens, components, layouts and page templates", long_about = None)]
pub struct Cli {
    /// Knowledge directory (overrides `knowledge_dir` from config.toml)
    #[arg(long, global = true)]
    pub kb_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Keyword search over the knowledge base
    Search(SearchArgs),

    /// Generate a design-system document for a query
    DesignSystem(DesignSystemArgs),

    /// Show record counts per category
    Status,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,
    /// Search domain: all, component, layout, style, color, typography, template, page
    #[arg(short, long, default_value = "all")]
    pub domain: String,
    /// Output format: ascii, markdown, json
    #[arg(short, long, default_value = "ascii")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct DesignSystemArgs {
    /// Design requirements query
    pub query: String,
    /// Project name used in the document title
    #[arg(short, long, default_value = "MyApp")]
    pub project: String,
    /// Write the document to <output-dir>/MASTER.md instead of stdout
    #[arg(long)]
    pub persist: bool,
    /// Directory used with --persist
    #[arg(long, default_value = "design-system")]
    pub output_dir: PathBuf,
}

use anyhow::{Context, Result};
use std::fs;

use harmonykb_search::{compose_digest, KnowledgeSearchEngine};

use crate::cli::{DesignSystemArgs, SearchArgs};
use crate::formatter::Format;

/// Handle search command - keyword search over the knowledge base
pub fn search(cmd: &SearchArgs, engine: &KnowledgeSearchEngine) -> Result<()> {
    if engine.catalog().filters().iter().all(|f| f.name != cmd.domain) {
        tracing::warn!(domain = %cmd.domain, "unknown search domain, nothing will match");
    }
    let results = engine.search(&cmd.query, &cmd.domain);
    println!("{}", Format::from_string(&cmd.format).render(&cmd.query, &results)?);
    Ok(())
}

/// Handle design-system command - print or persist the generated document
pub fn design_system(cmd: &DesignSystemArgs, engine: &KnowledgeSearchEngine) -> Result<()> {
    let document = compose_digest(engine, &cmd.query, &cmd.project);
    if !cmd.persist {
        println!("{document}");
        return Ok(());
    }
    fs::create_dir_all(&cmd.output_dir)
        .with_context(|| format!("Failed to create {}", cmd.output_dir.display()))?;
    let output_file = cmd.output_dir.join("MASTER.md");
    fs::write(&output_file, document).with_context(|| format!("Failed to write {}", output_file.display()))?;
    tracing::info!(path = %output_file.display(), "design system written");
    println!("Design system saved to: {}", output_file.display());
    Ok(())
}

/// Handle status command - record counts per category
pub fn status(engine: &KnowledgeSearchEngine) {
    let kb = engine.knowledge();
    let catalog = engine.catalog();
    println!("{:<16} {:>8}  Filters", "Category", "Records");
    println!("{}", "-".repeat(60));
    for spec in catalog.categories() {
        let filters = catalog.filters_for(&spec.key);
        let filters = if filters.is_empty() { "-".to_string() } else { filters.join(", ") };
        println!("{:<16} {:>8}  {}", spec.key, kb.records(&spec.key).len(), filters);
    }
    println!("{}", "-".repeat(60));
    println!("{:<16} {:>8}", "total", kb.total_records());
}

//! Design-system document assembled from the knowledge base.
//!
//! Reference tables (colors, typography, spacing) list the first records in
//! stored order without scoring; a table whose category the catalog does not
//! define is left out. Recommended components are the top component hits for
//! the query, each excerpted.
use harmonykb_core::types::Record;

use crate::engine::KnowledgeSearchEngine;

// Reference tables, each emitted only when the catalog defines its category.
const COLOR: &str = "color";
const TYPOGRAPHY: &str = "typography";
const SPACING: &str = "spacing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestLimits {
    pub colors: usize,
    pub typography: usize,
    pub spacing: usize,
    pub components: usize,
    /// Maximum characters kept from each component's content.
    pub excerpt_chars: usize,
}

impl Default for DigestLimits {
    fn default() -> Self { Self { colors: 8, typography: 6, spacing: 8, components: 5, excerpt_chars: 500 } }
}

pub fn compose_digest(engine: &KnowledgeSearchEngine, query: &str, project_name: &str) -> String {
    compose_digest_with(engine, query, project_name, DigestLimits::default())
}

pub fn compose_digest_with(engine: &KnowledgeSearchEngine, query: &str, project_name: &str, limits: DigestLimits) -> String {
    let kb = engine.knowledge();
    let mut out = Vec::new();
    out.push(format!("# {project_name} Design System"));
    out.push(format!("\n> Generated for: {query}\n"));

    let catalog = engine.catalog();

    if catalog.category(COLOR).is_some() {
        out.push("## Color Palette\n".to_string());
        out.push("| Token | Value | Usage |".to_string());
        out.push("|-------|-------|-------|".to_string());
        for color in head(kb.records(COLOR), limits.colors) {
            out.push(format!("| `{}` | `{}` | {} |", color.get("name"), color.get("value"), color.get("usage")));
        }
        out.push(String::new());
    }

    if catalog.category(TYPOGRAPHY).is_some() {
        out.push("## Typography\n".to_string());
        out.push("| Style | Size | Weight | Use Case |".to_string());
        out.push("|-------|------|--------|----------|".to_string());
        for typo in head(kb.records(TYPOGRAPHY), limits.typography) {
            out.push(format!(
                "| `{}` | {} | {} | {} |",
                typo.get("name"),
                typo.get("font_size"),
                typo.get("font_weight"),
                typo.get("use_case")
            ));
        }
        out.push(String::new());
    }

    if catalog.category(SPACING).is_some() {
        out.push("## Spacing\n".to_string());
        out.push("| Token | Value | Use Case |".to_string());
        out.push("|-------|-------|----------|".to_string());
        for space in head(kb.records(SPACING), limits.spacing) {
            out.push(format!("| `{}` | {} | {} |", space.get("name"), space.get("value"), space.get("use_case")));
        }
        out.push(String::new());
    }

    out.push("## Recommended Components\n".to_string());
    for hit in engine.search(query, "component").into_iter().take(limits.components) {
        out.push(format!("### {}\n", hit.title));
        out.push(format!("{}\n", truncate_chars(&hit.content, limits.excerpt_chars)));
    }

    out.join("\n")
}

fn head(records: &[Record], n: usize) -> &[Record] { &records[..records.len().min(n)] }

/// First `max` characters of `s`, never splitting a character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

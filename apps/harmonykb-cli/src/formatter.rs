use harmonykb_core::SearchResult;
use harmonykb_search::digest::truncate_chars;

const BANNER_WIDTH: usize = 60;
const PREVIEW_CHARS: usize = 200;

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ascii,
    Markdown,
    Json,
}

impl Format {
    /// Create format from string; anything unrecognised falls back to ascii
    /// with a warning.
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "md" | "markdown" => Self::Markdown,
            "ascii" => Self::Ascii,
            other => {
                tracing::warn!(format = %other, "unknown output format, using ascii");
                Self::Ascii
            }
        }
    }

    pub fn render(self, query: &str, results: &[SearchResult]) -> Result<String, anyhow::Error> {
        match self {
            Self::Ascii => Ok(render_ascii(query, results)),
            Self::Markdown => Ok(render_markdown(query, results)),
            Self::Json => Ok(serde_json::to_string_pretty(results)?),
        }
    }
}

fn render_ascii(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }
    let rule = "=".repeat(BANNER_WIDTH);
    let mut lines = vec![String::new(), rule.clone(), format!("Search Results for: {query}"), rule, String::new()];
    for (i, result) in results.iter().enumerate() {
        lines.push(format!("[{}] [{}] {}", i + 1, result.category.to_uppercase(), result.title));
        lines.push(format!("    Relevance: {}", stars(result.relevance)));
        lines.push(format!("    {}...", truncate_chars(&result.content, PREVIEW_CHARS)));
        lines.push(String::new());
    }
    lines.join("\n")
}

fn render_markdown(query: &str, results: &[SearchResult]) -> String {
    let mut lines = vec!["# Search Results".to_string(), String::new()];
    lines.push(format!("Found {} results for: {}", results.len(), query));
    for (i, result) in results.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("## {}. [{}] {}", i + 1, result.category, result.title));
        lines.push(format!("- **Relevance**: {:.1}", result.relevance));
        lines.push(String::new());
        lines.push("```".to_string());
        lines.push(result.content.clone());
        lines.push("```".to_string());
    }
    lines.join("\n")
}

/// One star per whole relevance point.
fn stars(relevance: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = relevance.max(0.0).floor() as usize;
    "★".repeat(n)
}

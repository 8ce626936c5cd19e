//! harmonykb-search
//!
//! Keyword-overlap search over the categorized knowledge base. Every query
//! term adds 2.0 when it is a case-insensitive substring of a record's title
//! and 1.0 when it is a substring of the record's body fields. Matching is
//! plain substring containment, so `cat` matches `category`.
use harmonykb_core::catalog::{CategoryCatalog, CategorySpec};
use harmonykb_core::types::{KnowledgeBase, Record, SearchResult};

pub const MAX_RESULTS: usize = 10;
const TITLE_WEIGHT: f64 = 2.0;
const BODY_WEIGHT: f64 = 1.0;

pub struct KnowledgeSearchEngine {
    kb: KnowledgeBase,
    catalog: CategoryCatalog,
}

impl KnowledgeSearchEngine {
    pub fn new(kb: KnowledgeBase, catalog: CategoryCatalog) -> Self { Self { kb, catalog } }

    pub fn knowledge(&self) -> &KnowledgeBase { &self.kb }

    pub fn catalog(&self) -> &CategoryCatalog { &self.catalog }

    /// Rank records of the categories `filter` expands to.
    ///
    /// Returns at most [`MAX_RESULTS`] results, highest score first. Equal
    /// scores keep the order in which records were visited: filter category
    /// order, then source order within a category.
    pub fn search(&self, query: &str, filter: &str) -> Vec<SearchResult> {
        let query = query.to_lowercase();
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for spec in self.catalog.resolve(filter) {
            for record in self.kb.records(&spec.key) {
                let score = score_record(&terms, spec, record);
                if score > 0.0 {
                    results.push(SearchResult {
                        category: spec.key.clone(),
                        title: spec.display_title(record),
                        content: spec.render_content(record),
                        relevance: score,
                    });
                }
            }
        }

        // sort_by is stable
        results.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
        results.truncate(MAX_RESULTS);
        tracing::debug!(query = %query, filter, hits = results.len(), "search finished");
        results
    }
}

fn score_record(terms: &[&str], spec: &CategorySpec, record: &Record) -> f64 {
    let title = spec.title(record).to_lowercase();
    let body = spec.body_text(record).to_lowercase();
    let mut score = 0.0;
    for term in terms {
        if title.contains(*term) {
            score += TITLE_WEIGHT;
        }
        if body.contains(*term) {
            score += BODY_WEIGHT;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> KnowledgeSearchEngine {
        let mut kb = KnowledgeBase::new();
        kb.insert(
            "component",
            vec![
                Record::new().with("name", "Button").with("description", "触发操作"),
                Record::new().with("name", "Text").with("description", "显示文字"),
            ],
        );
        KnowledgeSearchEngine::new(kb, CategoryCatalog::default())
    }

    #[test]
    fn substring_not_token_match() {
        let mut kb = KnowledgeBase::new();
        kb.insert("layout", vec![Record::new().with("name", "Category grid")]);
        let engine = KnowledgeSearchEngine::new(kb, CategoryCatalog::default());
        let hits = engine.search("cat", "layout");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].relevance, 2.0);
    }

    #[test]
    fn whitespace_only_query_is_empty() {
        assert!(engine().search(" \t\n ", "all").is_empty());
    }

    #[test]
    fn title_and_body_match_for_one_term_scores_three() {
        let mut kb = KnowledgeBase::new();
        kb.insert("component", vec![Record::new().with("name", "Toggle").with("description", "toggle switch")]);
        let engine = KnowledgeSearchEngine::new(kb, CategoryCatalog::default());
        assert_eq!(engine.search("toggle", "component")[0].relevance, 3.0);
    }
}

//! Domain types shared by the loader, the search engine and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::CategoryCatalog;
use crate::traits::KnowledgeLoader;

/// One design-knowledge entry: a flat set of named string fields.
///
/// Field lookups never fail. Any field the record does not carry reads as
/// the empty string, so a short CSV row or a missing column behaves exactly
/// like a present-but-blank value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map_or("", String::as_str)
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Categorized record collections, in the order the loader produced them.
///
/// Built once per process and read-only afterwards. Lookups for a category
/// that was never loaded yield an empty slice.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    categories: HashMap<String, Vec<Record>>,
}

impl KnowledgeBase {
    pub fn new() -> Self { Self::default() }

    /// Load every category the catalog knows about.
    ///
    /// A category whose source cannot be read is logged and kept as an empty
    /// collection; the knowledge base is still usable for the others.
    pub fn load(loader: &dyn KnowledgeLoader, catalog: &CategoryCatalog) -> Self {
        let mut kb = Self::new();
        for spec in catalog.categories() {
            let records = match loader.load_category(spec) {
                Ok(records) => {
                    tracing::debug!(category = %spec.key, count = records.len(), "loaded category");
                    records
                }
                Err(e) => {
                    tracing::warn!(category = %spec.key, error = %e, "failed to load category, treating it as empty");
                    Vec::new()
                }
            };
            kb.insert(spec.key.clone(), records);
        }
        kb
    }

    pub fn insert(&mut self, category: impl Into<String>, records: Vec<Record>) {
        self.categories.insert(category.into(), records);
    }

    pub fn records(&self, category: &str) -> &[Record] {
        self.categories.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_category(&self, category: &str) -> bool { self.categories.contains_key(category) }

    pub fn total_records(&self) -> usize { self.categories.values().map(Vec::len).sum() }
}

/// A ranked projection of a record produced for one query.
///
/// Plain data only: it serializes as `{category, title, content, relevance}`
/// and carries nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub category: String,
    pub title: String,
    pub content: String,
    pub relevance: f64,
}

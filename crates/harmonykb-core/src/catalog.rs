//! Declarative per-category configuration.
//!
//! Every category is described by one [`CategorySpec`]: where its records come
//! from, which field is the title, which fields are scored as body text, and
//! how a result's content is laid out. Filter groups map a user-facing filter
//! name (`all`, `style`, ...) to the categories it searches, in order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    /// Category tag carried by results, e.g. `component`.
    pub key: String,
    /// Source file name relative to the knowledge directory.
    pub source: String,
    pub title_field: String,
    /// When set, the title renders as `"{title} ({annotation})"`.
    #[serde(default)]
    pub title_annotation: Option<String>,
    /// Fields whose concatenation is matched as body text.
    #[serde(default)]
    pub body_fields: Vec<String>,
    /// Content layout with `{field}` placeholders.
    #[serde(default)]
    pub content_template: String,
}

impl CategorySpec {
    pub fn new(key: &str, source: &str, title_field: &str, body_fields: &[&str], content_template: &str) -> Self {
        Self {
            key: key.to_string(),
            source: source.to_string(),
            title_field: title_field.to_string(),
            title_annotation: None,
            body_fields: body_fields.iter().map(|f| (*f).to_string()).collect(),
            content_template: content_template.to_string(),
        }
    }

    pub fn with_title_annotation(mut self, field: &str) -> Self {
        self.title_annotation = Some(field.to_string());
        self
    }

    pub fn title<'r>(&self, record: &'r Record) -> &'r str { record.get(&self.title_field) }

    /// Body fields joined by newlines so a term never matches across two fields.
    pub fn body_text(&self, record: &Record) -> String {
        self.body_fields.iter().map(|f| record.get(f)).collect::<Vec<_>>().join("\n")
    }

    pub fn display_title(&self, record: &Record) -> String {
        let title = self.title(record);
        match &self.title_annotation {
            Some(field) => format!("{} ({})", title, record.get(field)),
            None => title.to_string(),
        }
    }

    pub fn render_content(&self, record: &Record) -> String { render_template(&self.content_template, record) }
}

/// Fill `{field}` placeholders from the record. Unknown fields render empty;
/// anything that is not a well-formed placeholder is copied through as is.
pub fn render_template(template: &str, record: &Record) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_placeholder(&after[..close]) => {
                out.push_str(record.get(&after[..close]));
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_placeholder(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub name: String,
    pub categories: Vec<String>,
}

impl FilterGroup {
    pub fn new(name: &str, categories: &[&str]) -> Self {
        Self { name: name.to_string(), categories: categories.iter().map(|c| (*c).to_string()).collect() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<CategorySpec>,
    filters: Vec<FilterGroup>,
}

impl CategoryCatalog {
    /// Build a catalog, rejecting duplicate keys and filters that name a
    /// category the catalog does not define.
    pub fn new(categories: Vec<CategorySpec>, filters: Vec<FilterGroup>) -> Result<Self> {
        let mut keys = HashSet::new();
        for spec in &categories {
            if !keys.insert(spec.key.as_str()) {
                return Err(Error::InvalidConfig(format!("duplicate category '{}'", spec.key)));
            }
        }
        let mut names = HashSet::new();
        for filter in &filters {
            if !names.insert(filter.name.as_str()) {
                return Err(Error::InvalidConfig(format!("duplicate filter '{}'", filter.name)));
            }
            if let Some(unknown) = filter.categories.iter().find(|c| !keys.contains(c.as_str())) {
                return Err(Error::InvalidConfig(format!(
                    "filter '{}' references unknown category '{}'",
                    filter.name, unknown
                )));
            }
        }
        Ok(Self { categories, filters })
    }

    pub fn categories(&self) -> &[CategorySpec] { &self.categories }

    pub fn filters(&self) -> &[FilterGroup] { &self.filters }

    pub fn category(&self, key: &str) -> Option<&CategorySpec> { self.categories.iter().find(|c| c.key == key) }

    /// Categories searched for `filter`, in the group's order. Unknown filter
    /// names resolve to nothing.
    pub fn resolve(&self, filter: &str) -> Vec<&CategorySpec> {
        self.filters
            .iter()
            .find(|f| f.name == filter)
            .map(|f| f.categories.iter().filter_map(|key| self.category(key)).collect())
            .unwrap_or_default()
    }

    /// Names of the filters that reach `category`.
    pub fn filters_for(&self, category: &str) -> Vec<&str> {
        self.filters
            .iter()
            .filter(|f| f.categories.iter().any(|c| c == category))
            .map(|f| f.name.as_str())
            .collect()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        let categories = vec![
            CategorySpec::new("component", "components.csv", "name", &["description"], "{description}\n\nUsage:\n{usage_example}"),
            CategorySpec::new("layout", "layouts.csv", "name", &["description"], "{description}\n\nCode:\n{code_example}"),
            CategorySpec::new("color", "colors.csv", "name", &["usage"], "Usage: {usage}\nLight: {light_mode}\nDark: {dark_mode}")
                .with_title_annotation("value"),
            CategorySpec::new(
                "typography",
                "typography.csv",
                "name",
                &["use_case"],
                "Font: {font_family}, Size: {font_size}, Weight: {font_weight}\nUse case: {use_case}",
            ),
            CategorySpec::new("spacing", "spacing.csv", "name", &["use_case"], "{value}\n{use_case}"),
            CategorySpec::new("animation", "animations.csv", "name", &["description"], "Duration: {duration}, Easing: {easing}\n{description}"),
            CategorySpec::new(
                "page_template",
                "page_templates.csv",
                "name",
                &["description"],
                "{description}\n\nComponents: {components_used}\n\nStructure:\n{layout_structure}",
            ),
        ];
        let filters = vec![
            FilterGroup::new("all", &["component", "layout", "color", "typography", "page_template"]),
            FilterGroup::new("component", &["component"]),
            FilterGroup::new("layout", &["layout"]),
            FilterGroup::new("style", &["color", "typography"]),
            FilterGroup::new("color", &["color"]),
            FilterGroup::new("typography", &["typography"]),
            FilterGroup::new("template", &["page_template"]),
            FilterGroup::new("page", &["page_template"]),
        ];
        Self { categories, filters }
    }
}

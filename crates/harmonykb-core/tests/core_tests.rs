use std::fs;
use tempfile::TempDir;

use harmonykb_core::catalog::{render_template, CategoryCatalog, CategorySpec, FilterGroup};
use harmonykb_core::config::{resolve_with_base, Config};
use harmonykb_core::error::Error;
use harmonykb_core::traits::KnowledgeLoader;
use harmonykb_core::{CsvLoader, KnowledgeBase, Record};

#[test]
fn record_missing_field_reads_empty() {
    let record = Record::new().with("name", "Button");
    assert_eq!(record.get("name"), "Button");
    assert_eq!(record.get("description"), "");
}

#[test]
fn csv_loader_strips_bom_and_keeps_order() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("components.csv"),
        "\u{feff}name,description,usage_example\nButton,按钮组件,Button('ok')\nText,文本组件,Text('hi')\n",
    )
    .unwrap();

    let catalog = CategoryCatalog::default();
    let spec = catalog.category("component").unwrap();
    let records = CsvLoader::new(tmp.path()).load_category(spec).expect("load");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("name"), "Button", "BOM must not leak into the first header");
    assert_eq!(records[1].get("name"), "Text");
    assert_eq!(records[0].get("usage_example"), "Button('ok')");
}

#[test]
fn csv_loader_tolerates_short_rows() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("colors.csv"), "name,value,usage\nprimary,#0A59F7\n").unwrap();

    let catalog = CategoryCatalog::default();
    let records = CsvLoader::new(tmp.path()).load_category(catalog.category("color").unwrap()).expect("load");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("value"), "#0A59F7");
    assert_eq!(records[0].get("usage"), "");
}

#[test]
fn csv_loader_reports_missing_file() {
    let tmp = TempDir::new().unwrap();
    let catalog = CategoryCatalog::default();
    let err = CsvLoader::new(tmp.path()).load_category(catalog.category("layout").unwrap()).unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable { ref category, .. } if category == "layout"));
}

#[test]
fn knowledge_base_keeps_every_category_when_sources_are_missing() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("components.csv"), "name,description\nButton,触发操作\n").unwrap();

    let catalog = CategoryCatalog::default();
    let kb = KnowledgeBase::load(&CsvLoader::new(tmp.path()), &catalog);

    assert_eq!(kb.records("component").len(), 1);
    for spec in catalog.categories() {
        assert!(kb.contains_category(&spec.key), "category {} should be present", spec.key);
    }
    assert!(kb.records("layout").is_empty());
    assert_eq!(kb.total_records(), 1);
}

#[test]
fn template_fills_known_fields_and_blanks_unknown_ones() {
    let record = Record::new().with("description", "desc").with("usage_example", "code");
    assert_eq!(render_template("{description}\n\nUsage:\n{usage_example}", &record), "desc\n\nUsage:\ncode");
    assert_eq!(render_template("[{missing}]", &record), "[]");
    assert_eq!(render_template("{ not a field } {", &record), "{ not a field } {");
}

#[test]
fn color_title_carries_value_annotation() {
    let catalog = CategoryCatalog::default();
    let spec = catalog.category("color").unwrap();
    let record = Record::new().with("name", "primary").with("value", "#0A59F7");
    assert_eq!(spec.display_title(&record), "primary (#0A59F7)");
}

#[test]
fn default_filters_expand_to_configured_categories() {
    let catalog = CategoryCatalog::default();
    let keys = |filter: &str| catalog.resolve(filter).into_iter().map(|s| s.key.clone()).collect::<Vec<_>>();

    assert_eq!(keys("all"), ["component", "layout", "color", "typography", "page_template"]);
    assert_eq!(keys("style"), ["color", "typography"]);
    assert_eq!(keys("template"), ["page_template"]);
    assert_eq!(keys("page"), ["page_template"]);
    assert!(keys("nonsense").is_empty());
    assert!(catalog.filters_for("spacing").is_empty());
}

#[test]
fn catalog_rejects_filter_with_unknown_category() {
    let categories = vec![CategorySpec::new("component", "components.csv", "name", &["description"], "{description}")];
    let err = CategoryCatalog::new(categories, vec![FilterGroup::new("all", &["component", "widget"])]).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn config_defaults_resolve_against_base() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_for_env(tmp.path(), "test").expect("config");
    assert_eq!(config.knowledge_dir, tmp.path().join("knowledge_base"));
    assert_eq!(config.catalog().expect("catalog"), CategoryCatalog::default());
}

#[test]
fn config_file_overrides_knowledge_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "knowledge_dir = \"kb\"\n").unwrap();
    fs::write(tmp.path().join("config.test.toml"), "knowledge_dir = \"kb-test\"\n").unwrap();

    let config = Config::load_for_env(tmp.path(), "test").expect("config");
    assert_eq!(config.knowledge_dir, tmp.path().join("kb-test"));
    assert_eq!(resolve_with_base(tmp.path(), "/abs/kb"), std::path::PathBuf::from("/abs/kb"));
}

#[test]
fn config_with_dangling_filter_fails_to_load() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[[filters]]\nname = \"all\"\ncategories = [\"widget\"]\n").unwrap();
    assert!(Config::load_for_env(tmp.path(), "test").is_err());
}

//! Configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults, `config.toml`,
//! `config.<env>.toml` and `APP_*` env vars, in that order of precedence.
//! Provides helpers to expand `~` and `${VAR}` and to resolve relative paths
//! against a known base directory.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::catalog::{CategoryCatalog, CategorySpec, FilterGroup};

const DEFAULT_KNOWLEDGE_DIR: &str = "knowledge_base";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one CSV file per category. Relative paths resolve
    /// against the directory the configuration was loaded from.
    pub knowledge_dir: PathBuf,
    pub categories: Vec<CategorySpec>,
    pub filters: Vec<FilterGroup>,
}

impl Default for Config {
    fn default() -> Self {
        let catalog = CategoryCatalog::default();
        Self {
            knowledge_dir: PathBuf::from(DEFAULT_KNOWLEDGE_DIR),
            categories: catalog.categories().to_vec(),
            filters: catalog.filters().to_vec(),
        }
    }
}

impl Config {
    /// Load from the current working directory.
    pub fn load() -> anyhow::Result<Self> { Self::load_in(Path::new(".")) }

    /// Load `config.toml` and the `RUST_ENV` overlay found in `base`.
    pub fn load_in(base: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(base, &env_name)
    }

    pub fn load_for_env(base: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::file(base.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration from {}: {}", base.display(), e))?;
        config.knowledge_dir = resolve_with_base(base, config.knowledge_dir.to_string_lossy());
        config.catalog()?;
        tracing::debug!(env = env_name, knowledge_dir = %config.knowledge_dir.display(), "configuration loaded");
        Ok(config)
    }

    /// Validated category table built from this configuration.
    pub fn catalog(&self) -> anyhow::Result<CategoryCatalog> {
        Ok(CategoryCatalog::new(self.categories.clone(), self.filters.clone())?)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}

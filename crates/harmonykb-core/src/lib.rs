#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod traits;
pub mod types;

pub use catalog::{CategoryCatalog, CategorySpec, FilterGroup};
pub use error::{Error, Result};
pub use loader::CsvLoader;
pub use types::{KnowledgeBase, Record, SearchResult};

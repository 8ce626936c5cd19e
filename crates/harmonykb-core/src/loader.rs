//! CSV-backed knowledge loader.
//!
//! Each category lives in one file under the knowledge directory, e.g.
//! `knowledge_base/components.csv`. The header row names the fields. Files
//! written by spreadsheet tools often start with a UTF-8 BOM, which is
//! dropped from the first header name.
use std::path::{Path, PathBuf};

use crate::catalog::CategorySpec;
use crate::error::{Error, Result};
use crate::traits::KnowledgeLoader;
use crate::types::Record;

const BOM: char = '\u{feff}';

#[derive(Debug, Clone)]
pub struct CsvLoader {
    dir: PathBuf,
}

impl CsvLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn path_for(&self, spec: &CategorySpec) -> PathBuf { self.dir.join(&spec.source) }

    fn read_records(path: &Path) -> std::result::Result<Vec<Record>, csv::Error> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| if i == 0 { h.trim_start_matches(BOM).to_string() } else { h.to_string() })
            .collect();
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            // Short rows leave trailing fields absent; extra cells are ignored.
            records.push(headers.iter().zip(row.iter()).map(|(h, v)| (h.clone(), v.to_string())).collect());
        }
        Ok(records)
    }
}

impl KnowledgeLoader for CsvLoader {
    fn load_category(&self, spec: &CategorySpec) -> Result<Vec<Record>> {
        let path = self.path_for(spec);
        if !path.is_file() {
            return Err(Error::SourceUnavailable { category: spec.key.clone(), path });
        }
        tracing::debug!(category = %spec.key, path = %path.display(), "reading knowledge file");
        Self::read_records(&path).map_err(|source| Error::Csv { path, source })
    }
}

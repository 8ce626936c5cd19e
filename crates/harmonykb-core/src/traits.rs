use crate::catalog::CategorySpec;
use crate::error::Result;
use crate::types::Record;

/// Produces the records of one category, in source order.
pub trait KnowledgeLoader: Send + Sync {
    fn load_category(&self, spec: &CategorySpec) -> Result<Vec<Record>>;
}

pub mod digest;
pub mod engine;
pub mod handle;

pub use digest::{compose_digest, compose_digest_with, DigestLimits};
pub use engine::{KnowledgeSearchEngine, MAX_RESULTS};
pub use handle::EngineHandle;

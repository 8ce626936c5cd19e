use std::sync::{Arc, PoisonError, RwLock};

use harmonykb_core::catalog::CategoryCatalog;
use harmonykb_core::traits::KnowledgeLoader;
use harmonykb_core::types::KnowledgeBase;

use crate::engine::KnowledgeSearchEngine;

/// Shared, swappable engine for long-lived callers.
///
/// Readers take a snapshot with [`EngineHandle::current`] and keep using it
/// while a reload builds a fresh engine and swaps the pointer. The knowledge
/// base behind a snapshot is never modified.
pub struct EngineHandle {
    inner: RwLock<Arc<KnowledgeSearchEngine>>,
}

impl EngineHandle {
    pub fn new(engine: KnowledgeSearchEngine) -> Self { Self { inner: RwLock::new(Arc::new(engine)) } }

    pub fn current(&self) -> Arc<KnowledgeSearchEngine> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Install `engine` and return the one it replaces.
    pub fn replace(&self, engine: KnowledgeSearchEngine) -> Arc<KnowledgeSearchEngine> {
        let next = Arc::new(engine);
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    pub fn reload(&self, loader: &dyn KnowledgeLoader, catalog: CategoryCatalog) -> Arc<KnowledgeSearchEngine> {
        let kb = KnowledgeBase::load(loader, &catalog);
        tracing::info!(records = kb.total_records(), "knowledge base reloaded");
        self.replace(KnowledgeSearchEngine::new(kb, catalog))
    }
}

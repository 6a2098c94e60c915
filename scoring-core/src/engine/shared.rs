//! Shared Engine Handle
//!
//! Hot-reloadable engine. Readers take an `Arc` snapshot; a reload builds
//! and validates a complete new engine, then swaps the pointer. A table
//! is never edited in place.

use std::sync::Arc;

use parking_lot::RwLock;

use super::ScoringEngine;
use crate::config::EngineConfig;
use crate::error::ScoringResult;

#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<Arc<ScoringEngine>>>,
}

impl SharedEngine {
    pub fn new(engine: ScoringEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(engine))),
        }
    }

    /// Snapshot of the engine in effect right now
    pub fn current(&self) -> Arc<ScoringEngine> {
        self.inner.read().clone()
    }

    /// Validate `config` and publish it. On error the old engine stays.
    pub fn reload(&self, config: EngineConfig) -> ScoringResult<()> {
        let engine = ScoringEngine::new(config)?;
        self.replace(engine);
        Ok(())
    }

    /// Publish an already-built engine
    pub fn replace(&self, engine: ScoringEngine) {
        *self.inner.write() = Arc::new(engine);
        tracing::info!("Scoring tables swapped");
    }
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(ScoringEngine::reference())
    }
}

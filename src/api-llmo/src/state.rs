use std::sync::Arc;

use tokio::sync::RwLock;

use core_llmo::{GenerationResult, LlmProvider};

/// Per-process session context: the completion provider plus the single
/// last-result slot the result and download endpoints read from.
///
/// There is exactly one writer per user action, so the lock exists only to
/// satisfy shared-state requirements of the handlers. Failures never write to
/// the slot; only a successful generation overwrites it.
pub struct AppState {
    provider: Arc<dyn LlmProvider + Send + Sync>,
    last_result: RwLock<Option<GenerationResult>>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider + Send + Sync>) -> SharedState {
        Arc::new(Self {
            provider,
            last_result: RwLock::new(None),
        })
    }

    pub fn provider(&self) -> &(dyn LlmProvider + Send + Sync) {
        self.provider.as_ref()
    }

    /// Overwrites the session slot with a fresh successful result.
    pub async fn store_result(&self, result: GenerationResult) {
        *self.last_result.write().await = Some(result);
    }

    pub async fn last_result(&self) -> Option<GenerationResult> {
        self.last_result.read().await.clone()
    }
}

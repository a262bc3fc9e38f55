use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use shared::domain::{ChefId, ChefRecord};
use tokio::sync::RwLock;
use tracing::{debug, info};

mod seed;

pub use seed::seed_chefs;

/// Append-only, process-local chef list. Cloning yields another handle to
/// the same list.
#[derive(Clone, Default)]
pub struct ChefStore {
    inner: Arc<RwLock<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    chefs: Vec<ChefRecord>,
    last_issued_ms: i64,
}

impl ChefStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::with_chefs(seed_chefs())
    }

    pub fn with_chefs(chefs: Vec<ChefRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreState {
                chefs,
                last_issued_ms: 0,
            })),
        }
    }

    pub async fn health_check(&self) -> Result<()> {
        let count = self.inner.read().await.chefs.len();
        debug!(count, "chef store reachable");
        Ok(())
    }

    pub async fn list_chefs(&self) -> Result<Vec<ChefRecord>> {
        Ok(self.inner.read().await.chefs.clone())
    }

    /// Appends `record` under a freshly issued id and returns that id. Any id
    /// the caller supplied is replaced.
    pub async fn add_chef(&self, mut record: ChefRecord) -> Result<ChefId> {
        let mut state = self.inner.write().await;
        let issued = next_id_millis(Utc::now().timestamp_millis(), state.last_issued_ms);
        state.last_issued_ms = issued;

        let chef_id = ChefId(issued.to_string());
        record.id = Some(chef_id.clone());
        state.chefs.push(record);
        info!(chef_id = %chef_id, total = state.chefs.len(), "chef added");
        Ok(chef_id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.chefs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Millisecond clock reading, bumped past the previous id when the clock has
/// not advanced.
fn next_id_millis(now_ms: i64, last_issued_ms: i64) -> i64 {
    if now_ms > last_issued_ms {
        now_ms
    } else {
        last_issued_ms + 1
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

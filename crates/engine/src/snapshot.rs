//! Player XP persistence seam
//!
//! The game client keeps XP between sessions; the engine only defines the
//! store interface and a helper that banks a finished leaderboard into it.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::models::LeaderboardEntry;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::rank::Scored;

/// Persistent per-player progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub xp: i64,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot backend error: {0}")]
    Backend(String),
}

/// Where player snapshots live, keyed by login.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self, login: &str) -> Result<Option<PlayerSnapshot>, SnapshotError>;
    async fn save(&self, login: &str, snapshot: PlayerSnapshot) -> Result<(), SnapshotError>;
}

/// In-memory store. All progress is lost when it is dropped.
pub struct MemorySnapshotStore {
    snapshots: RwLock<HashMap<String, PlayerSnapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self, login: &str) -> Result<Option<PlayerSnapshot>, SnapshotError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots.get(login).cloned())
    }

    async fn save(&self, login: &str, snapshot: PlayerSnapshot) -> Result<(), SnapshotError> {
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(login.to_string(), snapshot);
        Ok(())
    }
}

/// Add each entry's points to that player's banked XP.
pub async fn bank_points<S: Scored>(
    store: &dyn SnapshotStore,
    entries: &[LeaderboardEntry<S>],
    now: DateTime<Utc>,
) -> Result<(), SnapshotError> {
    for entry in entries {
        let mut snapshot = store.load(&entry.login).await?.unwrap_or_default();
        snapshot.xp += entry.stats.points();
        snapshot.updated_at = Some(now);
        store.save(&entry.login, snapshot).await?;
    }
    Ok(())
}

use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::mood::MoodEntry;

/// In-memory, append-only mood entry store (single-instance, lost on restart).
/// Entries are kept in the order they were recorded.
#[derive(Clone, Default)]
pub struct MoodStore {
    entries: Arc<RwLock<Vec<MoodEntry>>>,
}

impl MoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, entry: MoodEntry) {
        self.entries.write().await.push(entry);
    }

    /// Copy of every entry, oldest first. Derivations run on the copy so the
    /// lock is never held across them.
    pub async fn snapshot(&self) -> Vec<MoodEntry> {
        self.entries.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<MoodEntry> {
        self.entries
            .read()
            .await
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

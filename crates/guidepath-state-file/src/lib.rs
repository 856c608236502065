//! File-backed bookmark store for the Guidepath platform
//!
//! Persists the bookmark set as a JSON array, written through on every
//! mutation so the set survives process restarts. Storage failures never
//! crash the engine: a corrupt or missing file reads as an empty set, and
//! a failed write leaves the previously committed set intact.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use guidepath_core::{Bookmark, BookmarkStore, EngineError, WorkflowId};

/// Durable bookmark set backed by a JSON file.
pub struct FileBookmarkStore {
    path: PathBuf,
    entries: RwLock<Vec<Bookmark>>,
}

impl FileBookmarkStore {
    /// Open a store at the given path, loading any persisted entries.
    ///
    /// A missing file starts an empty set; a corrupt file is treated as an
    /// empty set rather than an error.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<Bookmark>>(&bytes) {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(path = %path.display(), %error, "corrupt bookmark file, starting empty");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        debug!(path = %path.display(), count = entries.len(), "opened bookmark store");
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    async fn persist(&self, entries: &[Bookmark]) -> Result<(), EngineError> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| EngineError::BookmarkPersistence(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| EngineError::BookmarkPersistence(e.to_string()))
    }
}

#[async_trait]
impl BookmarkStore for FileBookmarkStore {
    async fn is_bookmarked(&self, workflow_id: &WorkflowId) -> Result<bool, EngineError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().any(|b| &b.workflow_id == workflow_id))
    }

    async fn toggle(&self, workflow_id: &WorkflowId, title: &str) -> Result<bool, EngineError> {
        let mut entries = self.entries.write().await;

        // Mutate a copy and write it through; commit in memory only after
        // the write succeeds so a failed write leaves prior state intact.
        let mut next = entries.clone();
        let saved = if next.iter().any(|b| &b.workflow_id == workflow_id) {
            next.retain(|b| &b.workflow_id != workflow_id);
            false
        } else {
            next.push(Bookmark::new(workflow_id.clone(), title));
            true
        };

        self.persist(&next).await?;
        *entries = next;
        debug!(workflow_id = %workflow_id, saved, "bookmark toggled");
        Ok(saved)
    }

    async fn list(&self) -> Result<Vec<Bookmark>, EngineError> {
        Ok(self.entries.read().await.clone())
    }

    async fn remove(&self, workflow_id: &WorkflowId) -> Result<(), EngineError> {
        let mut entries = self.entries.write().await;
        if !entries.iter().any(|b| &b.workflow_id == workflow_id) {
            return Ok(());
        }

        let mut next = entries.clone();
        next.retain(|b| &b.workflow_id != workflow_id);

        self.persist(&next).await?;
        *entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pan() -> WorkflowId {
        WorkflowId::new("wf-pan-card")
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_membership() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBookmarkStore::open(dir.path().join("bookmarks.json")).await;

        assert!(!store.is_bookmarked(&pan()).await.unwrap());
        assert!(store.toggle(&pan(), "Apply for PAN Card").await.unwrap());
        assert!(store.is_bookmarked(&pan()).await.unwrap());
        assert!(!store.toggle(&pan(), "Apply for PAN Card").await.unwrap());
        assert!(!store.is_bookmarked(&pan()).await.unwrap());
    }

    #[tokio::test]
    async fn test_bookmarks_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");

        {
            let store = FileBookmarkStore::open(&path).await;
            store.toggle(&pan(), "Apply for PAN Card").await.unwrap();
            store
                .toggle(&WorkflowId::new("wf-voter-id"), "Apply for Voter ID Card")
                .await
                .unwrap();
        }

        let reopened = FileBookmarkStore::open(&path).await;
        let listed = reopened.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].workflow_id, pan());
        assert_eq!(listed[1].title, "Apply for Voter ID Card");
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");
        tokio::fs::write(&path, b"{not json!").await.unwrap();

        let store = FileBookmarkStore::open(&path).await;
        assert!(store.list().await.unwrap().is_empty());

        // The store is still usable and overwrites the corrupt content
        store.toggle(&pan(), "Apply for PAN Card").await.unwrap();
        let reopened = FileBookmarkStore::open(&path).await;
        assert_eq!(reopened.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_prior_state_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.json");

        let store = FileBookmarkStore::open(&path).await;
        store.toggle(&pan(), "Apply for PAN Card").await.unwrap();

        // Turn the target path into a directory so the next write fails
        tokio::fs::remove_file(&path).await.unwrap();
        tokio::fs::create_dir(&path).await.unwrap();

        let result = store
            .toggle(&WorkflowId::new("wf-voter-id"), "Apply for Voter ID Card")
            .await;
        assert!(matches!(result, Err(EngineError::BookmarkPersistence(_))));

        // Prior membership is unchanged
        assert!(store.is_bookmarked(&pan()).await.unwrap());
        assert!(!store
            .is_bookmarked(&WorkflowId::new("wf-voter-id"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBookmarkStore::open(dir.path().join("bookmarks.json")).await;

        store.toggle(&pan(), "Apply for PAN Card").await.unwrap();
        store.remove(&pan()).await.unwrap();
        store.remove(&pan()).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}

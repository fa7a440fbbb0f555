//! JSON-file history of saved comparisons.
//!
//! The whole document is read on every load and rewritten on every mutation.
//! There is no locking: two processes saving at once race on the
//! read-modify-write and the last writer wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::HistoryConfig;
use crate::errors::ComparatorError;
use crate::models::ComparisonEntry;

/// Saved comparisons, most recent first.
pub type History = Vec<ComparisonEntry>;

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::new(&config.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full history. A missing file is an empty history; a
    /// malformed one is an error.
    pub async fn load(&self) -> Result<History, ComparatorError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No history file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let history: History = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), entries = history.len(), "History loaded");
        Ok(history)
    }

    /// Prepend `entry` and rewrite the document.
    pub async fn append(&self, entry: ComparisonEntry) -> Result<(), ComparatorError> {
        let mut history = self.load().await?;
        history.insert(0, entry);
        self.save(&history).await?;
        info!(path = %self.path.display(), entries = history.len(), "Saved comparison to history");
        Ok(())
    }

    /// Replace the document with an empty list.
    pub async fn clear(&self) -> Result<(), ComparatorError> {
        self.save(&[]).await?;
        info!(path = %self.path.display(), "History cleared");
        Ok(())
    }

    /// Write `history` as the whole document.
    pub async fn save(&self, history: &[ComparisonEntry]) -> Result<(), ComparatorError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(history)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Responses;
    use tempfile::TempDir;

    fn entry(prompt: &str, reply: &str) -> ComparisonEntry {
        ComparisonEntry::new(prompt, [("GPT-4o (OpenAI)", reply)].into_iter().collect::<Responses>())
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_prepends() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        store.append(entry("first", "a")).await.unwrap();
        store.append(entry("second", "b")).await.unwrap();

        let history = store.load().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].prompt, "second");
        assert_eq!(history[1].prompt, "first");
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("nested/data/history.json"));
        store.append(entry("p", "r")).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_clear_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        store.append(entry("p", "r")).await.unwrap();
        store.clear().await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "[]");
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not a list").unwrap();
        let err = HistoryStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, ComparatorError::Json(_)));
    }

    #[tokio::test]
    async fn test_unicode_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("history.json"));
        store.append(entry("Grüße", "❌ Error: boom")).await.unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("Grüße"));
        assert!(raw.contains("❌ Error: boom"));
    }
}

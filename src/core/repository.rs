//! Queue repository trait and the in-memory implementation.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};

use super::store::QueueStore;

/// Storage backend consumed by the HTTP layer.
#[async_trait]
pub trait QueueRepository: Send + Sync {
    /// Append `value` to the tail of the queue under `key`, creating it if needed.
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Pop the oldest value under `key` without waiting.
    async fn get(&self, key: &str) -> Result<String>;
}

/// Process-local repository. One mutex guards every queue; it is only held
/// for the duration of a single primitive call.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    store: Mutex<QueueStore>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(QueueStore::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, QueueStore>> {
        self.store
            .lock()
            .map_err(|_| Error::internal("queue store lock poisoned"))
    }

    /// Values currently waiting under `key`.
    pub fn len(&self, key: &str) -> Result<Option<usize>> {
        Ok(self.lock()?.len(key))
    }

    /// Keys ever used, emptied ones included.
    pub fn key_count(&self) -> Result<usize> {
        Ok(self.lock()?.key_count())
    }
}

#[async_trait]
impl QueueRepository for MemoryRepository {
    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut store = self.lock()?;

        if store.contains(key) {
            store.append(key, value.to_string())?;
        } else {
            store.create(key, value.to_string())?;
            tracing::debug!("Created queue '{}'", key);
        }

        tracing::debug!(
            "Queued value under '{}' ({} waiting)",
            key,
            store.len(key).unwrap_or(0)
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String> {
        let value = self.lock()?.pop_head(key)?;
        tracing::debug!("Popped value from '{}'", key);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_fifo_order() {
        let repo = MemoryRepository::new();
        for v in ["v1", "v2", "v3", "v4"] {
            repo.put("jobs", v).await.unwrap();
        }

        let mut out = Vec::new();
        for _ in 0..4 {
            out.push(repo.get("jobs").await.unwrap());
        }

        assert_eq!(out, vec!["v1", "v2", "v3", "v4"]);
    }

    #[tokio::test]
    async fn test_get_unknown_key() {
        let repo = MemoryRepository::new();

        assert!(repo.get("never").await.unwrap_err().is_not_found());
        assert_eq!(repo.key_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_drained_key() {
        let repo = MemoryRepository::new();
        repo.put("jobs", "a").await.unwrap();
        repo.get("jobs").await.unwrap();

        assert!(repo.get("jobs").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_drained_key_is_remembered() {
        let repo = MemoryRepository::new();
        repo.put("jobs", "a").await.unwrap();
        repo.get("jobs").await.unwrap();

        assert_eq!(repo.len("jobs").unwrap(), Some(0));
        assert_eq!(repo.key_count().unwrap(), 1);

        repo.put("jobs", "b").await.unwrap();
        assert_eq!(repo.get("jobs").await.unwrap(), "b");
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let repo = MemoryRepository::new();
        repo.put("a", "1").await.unwrap();
        repo.put("b", "2").await.unwrap();

        assert_eq!(repo.get("b").await.unwrap(), "2");
        assert_eq!(repo.get("a").await.unwrap(), "1");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_put_then_get() {
        const N: usize = 200;
        let repo = Arc::new(MemoryRepository::new());

        let mut puts = Vec::new();
        for i in 0..N {
            let repo = repo.clone();
            puts.push(tokio::spawn(async move {
                repo.put("shared", &format!("v{}", i)).await
            }));
        }
        for handle in puts {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(repo.len("shared").unwrap(), Some(N));

        let mut gets = Vec::new();
        for _ in 0..N {
            let repo = repo.clone();
            gets.push(tokio::spawn(async move { repo.get("shared").await }));
        }

        let mut seen = HashSet::new();
        for handle in gets {
            let value = handle.await.unwrap().unwrap();
            assert!(seen.insert(value), "value returned twice");
        }

        let expected: HashSet<String> = (0..N).map(|i| format!("v{}", i)).collect();
        assert_eq!(seen, expected);
        assert!(repo.get("shared").await.unwrap_err().is_not_found());
    }
}

//! Key to FIFO sequence storage.
//!
//! `QueueStore` holds the raw primitives and performs no locking of its own;
//! `MemoryRepository` owns one behind a mutex.

use std::collections::{HashMap, VecDeque};

use crate::error::{Error, Result};

/// Map of key to queued values, oldest at the front.
#[derive(Debug, Default)]
pub struct QueueStore {
    queues: HashMap<String, VecDeque<String>>,
}

impl QueueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    /// Whether the key has ever been used. Emptied queues still count.
    pub fn contains(&self, key: &str) -> bool {
        self.queues.contains_key(key)
    }

    /// Insert a new queue holding only `value`.
    ///
    /// The caller must have checked that `key` is absent; an existing queue
    /// is never replaced.
    pub fn create(&mut self, key: &str, value: String) -> Result<()> {
        if self.queues.contains_key(key) {
            return Err(Error::internal(format!(
                "queue '{}' already exists",
                key
            )));
        }

        self.queues.insert(key.to_string(), VecDeque::from([value]));
        Ok(())
    }

    /// Append `value` to the tail of an existing queue.
    pub fn append(&mut self, key: &str, value: String) -> Result<()> {
        let queue = self
            .queues
            .get_mut(key)
            .ok_or_else(|| Error::not_found(key))?;

        queue.push_back(value);
        Ok(())
    }

    /// Remove and return the oldest value. Absent and empty queues both
    /// report `NotFound`.
    pub fn pop_head(&mut self, key: &str) -> Result<String> {
        self.queues
            .get_mut(key)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| Error::not_found(key))
    }

    /// Number of values waiting under `key`, `None` if the key is unknown.
    pub fn len(&self, key: &str) -> Option<usize> {
        self.queues.get(key).map(VecDeque::len)
    }

    /// Number of known keys, including those with empty queues.
    pub fn key_count(&self) -> usize {
        self.queues.len()
    }
}

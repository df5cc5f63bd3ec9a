//! Core module - the queue repository.
//!
//! - Key to FIFO storage primitives
//! - The repository trait and its in-memory implementation
//! - Bounded-wait pop on top of any repository

pub mod repository;
pub mod store;
pub mod wait;

pub use repository::{MemoryRepository, QueueRepository};
pub use store::QueueStore;
pub use wait::{get_with_wait, WaitBudget, RETRY_INTERVAL};

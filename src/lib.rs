//! keyqueue library root.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod web;

pub use cli::Commands;
pub use config::{load_settings, Settings};
pub use self::core::{get_with_wait, MemoryRepository, QueueRepository, WaitBudget};
pub use error::{Error, Result};
pub use web::run_server;

//! API endpoints module.

pub mod queue;

pub use queue::{get_root, get_value, put_root, put_value};

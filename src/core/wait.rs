//! Bounded-wait pop.
//!
//! A waiting `get` polls the repository once per second until a value shows
//! up, the budget runs out, or the cancellation token fires. The repository
//! lock is only taken inside each attempt, never across the sleep.

use std::str::FromStr;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

use super::repository::QueueRepository;

/// Delay between two attempts; one unit of wait budget.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Whole seconds a caller is willing to wait for a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaitBudget {
    seconds: u64,
}

impl WaitBudget {
    /// Single attempt, no waiting.
    pub const NONE: WaitBudget = WaitBudget { seconds: 0 };

    pub fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Parse an optional query parameter. A missing or empty parameter means
    /// no wait; anything else must be a non-negative integer.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw {
            None | Some("") => Ok(Self::NONE),
            Some(s) => s.parse(),
        }
    }
}

impl FromStr for WaitBudget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let seconds: i64 = s
            .parse()
            .map_err(|_| Error::InvalidWaitBudget(s.to_string()))?;

        if seconds < 0 {
            return Err(Error::InvalidWaitBudget(s.to_string()));
        }

        Ok(Self::from_secs(seconds as u64))
    }
}

/// Pop the oldest value under `key`, retrying `NotFound` once per
/// [`RETRY_INTERVAL`] for up to `budget` retries.
///
/// Exhaustion and cancellation both end in `NotFound`. Errors other than
/// `NotFound` are returned straight away.
pub async fn get_with_wait(
    repo: &dyn QueueRepository,
    key: &str,
    budget: WaitBudget,
    cancel: &CancellationToken,
) -> Result<String> {
    let mut remaining = budget.seconds();

    loop {
        match repo.get(key).await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_not_found() && remaining > 0 => {
                remaining -= 1;
                tokio::select! {
                    _ = tokio::time::sleep(RETRY_INTERVAL) => {}
                    _ = cancel.cancelled() => {
                        tracing::debug!("Wait on '{}' cancelled", key);
                        return Err(e);
                    }
                }
            }
            Err(e) => {
                if budget.seconds() > 0 && e.is_not_found() {
                    tracing::debug!("Wait on '{}' exhausted after {}s", key, budget.seconds());
                }
                return Err(e);
            }
        }
    }
}

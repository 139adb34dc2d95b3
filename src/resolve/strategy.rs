use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::common::types::{QualityTier, VideoId};

/// Wall-clock budget shared by a whole resolution attempt. Every strategy
/// that does timed network I/O draws from the same remaining window, so a
/// slow early strategy cannot hand later ones a fresh clock.
#[derive(Debug, Clone, Copy)]
pub struct Budget {
    deadline: Instant,
}

impl Budget {
    pub fn new(total: Duration) -> Self {
        Self {
            deadline: Instant::now() + total,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn expired(&self) -> bool {
        self.remaining().is_zero()
    }
}

/// Failures internal to the resolve layer. These never escape to callers;
/// they only advance the strategy chain.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("resolution timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// One named way of turning a video id into a reachable media URL.
///
/// Strategies are tried strictly in the order they were registered;
/// returning `None` means "try the next one".
#[async_trait]
pub trait ResolutionStrategy: Send + Sync {
    fn name(&self) -> &str;

    async fn resolve(
        &self,
        video_id: &VideoId,
        quality: QualityTier,
        budget: &Budget,
    ) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_counts_down_and_expires() {
        let budget = Budget::new(Duration::from_millis(50));
        assert!(!budget.expired());
        assert!(budget.remaining() <= Duration::from_millis(50));

        std::thread::sleep(Duration::from_millis(60));
        assert!(budget.expired());
        assert_eq!(budget.remaining(), Duration::ZERO);
    }
}

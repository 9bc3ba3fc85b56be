//! Delivering a finished review.
//!
//! [`Submitter`] is the seam for a real backend. The app ships with
//! [`SimulatedSubmitter`], which waits a fixed delay and then acknowledges.

use crate::sentiment::Sentiment;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Delay used by [`SimulatedSubmitter::default`].
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Immutable snapshot of a valid review, handed to a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub project_id: String,
    pub member_id: String,
    pub keep_doing: String,
    pub start_doing: String,
    pub stop_doing: String,
    pub sentiment: Sentiment,
}

/// Acknowledgment of an accepted review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub receipt: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend refused the review.
    #[error("review rejected: {0}")]
    Rejected(String),
    /// The backend could not be reached.
    #[error("review service unavailable: {0}")]
    Unavailable(String),
}

/// Sends a review somewhere and reports the outcome.
///
/// The returned future is `'static` so the runtime can drive it on its own
/// task while the form keeps rendering.
pub trait Submitter: Send + Sync {
    fn submit(&self, review: ReviewSubmission) -> BoxFuture<'static, Result<Ack, SubmitError>>;
}

/// Accepts every review after `delay`, handing out increasing receipts.
#[derive(Debug)]
pub struct SimulatedSubmitter {
    delay: Duration,
    next_receipt: AtomicU64,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_receipt: AtomicU64::new(1),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, review: ReviewSubmission) -> BoxFuture<'static, Result<Ack, SubmitError>> {
        let receipt = self.next_receipt.fetch_add(1, Ordering::Relaxed);
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(
                receipt,
                project = %review.project_id,
                member = %review.member_id,
                sentiment = %review.sentiment,
                "simulated submit accepted"
            );
            Ok(Ack { receipt })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review() -> ReviewSubmission {
        ReviewSubmission {
            project_id: "p1".into(),
            member_id: "m1".into(),
            keep_doing: "Great teamwork".into(),
            start_doing: String::new(),
            stop_doing: String::new(),
            sentiment: Sentiment::Excellent,
        }
    }

    #[test]
    fn default_delay_matches_constant() {
        assert_eq!(SimulatedSubmitter::default().delay(), DEFAULT_SUBMIT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_only_after_delay() {
        let submitter = SimulatedSubmitter::default();
        let start = tokio::time::Instant::now();
        let ack = submitter.submit(review()).await;
        assert_eq!(ack, Ok(Ack { receipt: 1 }));
        assert!(start.elapsed() >= DEFAULT_SUBMIT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn receipts_increase() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(10));
        let first = submitter.submit(review());
        let second = submitter.submit(review());
        let (a, b) = futures::join!(first, second);
        assert_eq!(a.map(|ack| ack.receipt), Ok(1));
        assert_eq!(b.map(|ack| ack.receipt), Ok(2));
    }

    #[test]
    fn errors_describe_cause() {
        let err = SubmitError::Unavailable("timeout".into());
        assert_eq!(err.to_string(), "review service unavailable: timeout");
    }
}

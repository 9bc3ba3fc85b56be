use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};

/// A repeating timer that fires at a fixed interval.
///
/// Each tick emits the current [`Instant`]. The `id` field keeps separate
/// timers (e.g. the submit spinner) distinct when subscriptions are diffed.
///
/// # Example
///
/// ```rust,ignore
/// let sub = subscribe(Every::new(Duration::from_millis(80), "submit-spinner"))
///     .map(|_| Msg::SpinnerTick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// A string identifier used to distinguish this timer from others.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer with the given interval and identifier.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        tokio_stream::wrappers::IntervalStream::new(interval)
            .map(|tick| tick.into_std())
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_depends_on_name() {
        let a = Every::new(Duration::from_millis(80), "submit-spinner");
        let b = Every::new(Duration::from_millis(80), "other");
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test(start_paused = true)]
    async fn every_ticks_repeatedly() {
        let mut stream = Every::new(Duration::from_millis(50), "t").stream();
        let first = stream.next().await;
        let second = stream.next().await;
        assert!(first.is_some());
        assert!(second.is_some());
    }
}

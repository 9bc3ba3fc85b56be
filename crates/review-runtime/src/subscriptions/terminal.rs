use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::Arc;

/// Marker type giving the terminal event subscription its identity.
pub struct TerminalEvents;

/// Create a terminal events subscription that maps each event through a
/// user-provided function.
///
/// The `map` closure returns `Some(Msg)` to forward an event or `None` to
/// discard it. Because the closure is rebuilt on every update cycle, it can
/// capture view state (such as which field has focus) to route keys.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let map = Arc::new(map);

    // EventStream is created inside the spawned task: building it on every
    // subscriptions() call would poke crossterm's global reader and steal
    // events from the live stream.
    Subscription::from_stream_fn(SubscriptionId::of::<TerminalEvents>(), move || {
        EventStream::new()
            .filter_map(move |result| {
                let map = map.clone();
                async move {
                    match result {
                        Ok(event) => TerminalEvent::from_crossterm(event).and_then(|ev| map(ev)),
                        Err(err) => {
                            tracing::warn!(%err, "terminal event stream error");
                            None
                        }
                    }
                }
            })
            .boxed()
    })
}

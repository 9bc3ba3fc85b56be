use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives a continuous **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) builds the initial state and may return a
///    [`Command`] for startup side effects (e.g. setting the window title).
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Key presses and timer ticks arrive as messages through [`Subscription`]s;
///    async work started with [`Command::perform`] reports back the same way.
/// 4. [`update`](Model::update) handles each message, mutates state, and
///    optionally returns a [`Command`].
/// 5. Steps 2--4 repeat until the program quits.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// Every event that can affect the application state.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// The peer review app passes its submitter and timing configuration
    /// here; use `()` when nothing is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    ///
    /// After `update` returns, the runtime re-renders with [`view`](Model::view)
    /// and reconciles [`subscriptions`](Model::subscriptions).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions.  Called after every update.
    ///
    /// The runtime diffs the returned list against the previously active set:
    /// new subscriptions are started and removed ones are cancelled.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}

use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives the area to draw into, so a parent can
/// lay out several children. The parent wraps each child's message type in
/// one of its own variants and lifts child commands with [`Command::map`]:
///
/// ```rust,ignore
/// enum Msg { Project(select::Message), KeepDoing(text_field::Message) }
///
/// fn update(&mut self, msg: Msg) -> Command<Msg> {
///     match msg {
///         Msg::Project(m) => self.project.update(m).map(Msg::Project),
///         Msg::KeepDoing(m) => self.keep_doing.update(m).map(Msg::KeepDoing),
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must confine drawing to it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Subscriptions this component needs while in its current state.
    ///
    /// The parent collects these and maps them into its own message type.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has keyboard focus.
    fn focused(&self) -> bool {
        false
    }
}

//! Animated busy indicator shown while work is in flight.

use review_runtime::command::Command;
use review_runtime::component::Component;
use review_runtime::subscription::{subscribe, Subscription};
use review_runtime::subscriptions::Every;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Duration;

/// Built-in spinner frame sets.
pub mod frames {
    /// Braille dot spinner cycling through ten positions.
    pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    /// Classic ASCII line spinner, for terminals without braille glyphs.
    pub const LINE: &[&str] = &["|", "/", "-", "\\"];
}

/// Messages for the spinner component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance the spinner to its next frame.
    Tick,
}

/// A spinner that only ticks (and only subscribes to its timer) while running.
pub struct Spinner {
    frames: &'static [&'static str],
    frame_index: usize,
    title: String,
    style: Style,
    interval: Duration,
    spinning: bool,
    id: &'static str,
}

impl Spinner {
    /// Create a stopped spinner. `id` names its timer subscription.
    pub fn new(id: &'static str) -> Self {
        Self {
            frames: frames::DOTS,
            frame_index: 0,
            title: String::new(),
            style: Style::default().fg(Color::Cyan),
            interval: Duration::from_millis(80),
            spinning: false,
            id,
        }
    }

    pub fn with_frames(mut self, frames: &'static [&'static str]) -> Self {
        self.frames = frames;
        self
    }

    /// Text displayed after the spinner frame.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Start from the first frame.
    pub fn start(&mut self) {
        self.spinning = true;
        self.frame_index = 0;
    }

    pub fn stop(&mut self) {
        self.spinning = false;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// The frame currently displayed.
    pub fn frame(&self) -> &'static str {
        self.frames.get(self.frame_index).copied().unwrap_or("")
    }
}

impl Component for Spinner {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Tick => {
                if self.spinning && !self.frames.is_empty() {
                    self.frame_index = (self.frame_index + 1) % self.frames.len();
                }
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if !self.spinning || area.width == 0 || area.height == 0 {
            return;
        }

        let text = if self.title.is_empty() {
            self.frame().to_string()
        } else {
            format!("{} {}", self.frame(), self.title)
        };
        frame.render_widget(Paragraph::new(Span::styled(text, self.style)), area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.spinning {
            vec![subscribe(Every::new(self.interval, self.id)).map(|_| Message::Tick)]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_spinner_has_no_subscription() {
        let spinner = Spinner::new("submit");
        assert!(!spinner.is_spinning());
        assert!(spinner.subscriptions().is_empty());
    }

    #[test]
    fn ticks_advance_only_while_spinning() {
        let mut spinner = Spinner::new("submit").with_frames(frames::LINE);
        spinner.update(Message::Tick);
        assert_eq!(spinner.frame(), "|");

        spinner.start();
        assert_eq!(spinner.subscriptions().len(), 1);
        spinner.update(Message::Tick);
        assert_eq!(spinner.frame(), "/");
        for _ in 0..3 {
            spinner.update(Message::Tick);
        }
        assert_eq!(spinner.frame(), "|");
    }

    #[test]
    fn start_rewinds() {
        let mut spinner = Spinner::new("submit").with_frames(frames::LINE);
        spinner.start();
        spinner.update(Message::Tick);
        spinner.stop();
        spinner.start();
        assert_eq!(spinner.frame(), "|");
    }
}

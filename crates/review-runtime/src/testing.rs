use crate::command::{Action, Command, CommandInner};
use crate::model::Model;
use futures::future::BoxFuture;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Synchronous commands ([`Command::message`]) are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages). Async commands
/// ([`Command::perform`]) are held until [`settle`](TestProgram::settle)
/// awaits them, which lets a test observe the in-between state (for example
/// a review that is still submitting) before letting the work finish.
/// Terminal commands are recorded as a count and otherwise ignored.
///
/// # Example
///
/// ```rust,ignore
/// let mut prog = TestProgram::<ReviewApp>::new(flags);
/// prog.send(Msg::Submit);
/// assert!(prog.has_pending_futures());
/// prog.settle().await;
/// assert!(prog.render_string(80, 30).contains("Đánh giá thành công"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    pending_futures: Vec<BoxFuture<'static, M::Message>>,
    quit_requested: bool,
    terminal_commands: usize,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            pending_futures: Vec::new(),
            quit_requested: false,
            terminal_commands: 0,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process pending synchronous messages until none are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                self.send(msg);
            }
        }
    }

    /// Await every pending async command and feed its message back into
    /// `update`, repeating until no sync or async work remains.
    ///
    /// Run this under `#[tokio::test(start_paused = true)]` so timed work
    /// completes on virtual time.
    pub async fn settle(&mut self) {
        loop {
            self.drain_messages();
            if self.pending_futures.is_empty() {
                break;
            }
            let futures: Vec<_> = self.pending_futures.drain(..).collect();
            for msg in futures::future::join_all(futures).await {
                self.send(msg);
            }
        }
    }

    /// Whether async work is waiting for [`settle`](TestProgram::settle).
    pub fn has_pending_futures(&self) -> bool {
        !self.pending_futures.is_empty()
    }

    /// Whether any processed command asked the program to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Number of terminal commands the model has issued.
    pub fn terminal_commands(&self) -> usize {
        self.terminal_commands
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per buffer row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit_requested = true,
            CommandInner::Future(fut) => self.pending_futures.push(fut),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
            CommandInner::Terminal(_) => self.terminal_commands += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;
    use std::time::Duration;

    // Counts submissions; each submit resolves after a short delay.
    struct Outbox {
        sent: Vec<String>,
        in_flight: usize,
    }

    #[derive(Debug)]
    enum OutboxMsg {
        Queue(String),
        Delivered(String),
        Close,
    }

    impl Model for Outbox {
        type Message = OutboxMsg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<OutboxMsg>) {
            (
                Outbox {
                    sent: vec![],
                    in_flight: 0,
                },
                Command::set_title("outbox"),
            )
        }

        fn update(&mut self, msg: OutboxMsg) -> Command<OutboxMsg> {
            match msg {
                OutboxMsg::Queue(text) => {
                    self.in_flight += 1;
                    Command::perform(
                        async move {
                            tokio::time::sleep(Duration::from_millis(500)).await;
                            text
                        },
                        OutboxMsg::Delivered,
                    )
                }
                OutboxMsg::Delivered(text) => {
                    self.in_flight -= 1;
                    self.sent.push(text);
                    Command::none()
                }
                OutboxMsg::Close => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = format!("sent {} / pending {}", self.sent.len(), self.in_flight);
            frame.render_widget(Paragraph::new(text), frame.area());
        }
    }

    #[test]
    fn init_commands_are_collected() {
        let prog = TestProgram::<Outbox>::new(());
        assert_eq!(prog.terminal_commands(), 1);
        assert!(!prog.has_pending_futures());
    }

    #[test]
    fn async_work_waits_for_settle() {
        let mut prog = TestProgram::<Outbox>::new(());
        prog.send(OutboxMsg::Queue("hello".into()));
        assert!(prog.has_pending_futures());
        assert_eq!(prog.model().in_flight, 1);
        assert!(prog.render_string(30, 1).contains("pending 1"));
    }

    #[tokio::test(start_paused = true)]
    async fn settle_delivers_async_results() {
        let mut prog = TestProgram::<Outbox>::new(());
        prog.send(OutboxMsg::Queue("a".into()));
        prog.send(OutboxMsg::Queue("b".into()));
        prog.settle().await;

        assert_eq!(prog.model().sent, vec!["a", "b"]);
        assert_eq!(prog.model().in_flight, 0);
        assert!(prog.render_string(30, 1).contains("sent 2 / pending 0"));
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Outbox>::new(());
        prog.send(OutboxMsg::Close);
        assert!(prog.quit_requested());
    }
}

//! The terminal form: widgets wired to a [`ReviewSession`].
//!
//! Widgets own editing state (cursor positions, open dropdowns); the session
//! owns everything that matters for validity and submission. Every widget
//! event that changes a value is turned into a session [`Action`], and after
//! each transition the widgets are re-synced from the session so resets and
//! cascading clears show up on screen.

mod view;

use crate::directory::Directory;
use crate::feedback::FeedbackField;
use crate::selection::Selection;
use crate::sentiment::Sentiment;
use crate::session::{Action, Effect, Phase, ReviewSession};
use crate::submitter::{Ack, SubmitError, Submitter};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use review_runtime::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
use review_widgets::focus::FocusGroup;
use review_widgets::key::{Binding, KeyCombination};
use review_widgets::select::{self, Select, SelectOption};
use review_widgets::spinner::{self, Spinner};
use review_widgets::text_field::{self, TextField};
use std::sync::Arc;

const PROJECT: usize = 0;
const MEMBER: usize = 1;
const FIRST_FIELD: usize = 2;
const SENTIMENT: usize = 5;
const SUBMIT: usize = 6;
const SLOTS: usize = 7;

pub const PROJECT_LABEL: &str = "Chọn Dự Án";
pub const PROJECT_PLACEHOLDER: &str = "Chọn dự án...";
pub const MEMBER_LABEL: &str = "Người được review";
pub const MEMBER_PLACEHOLDER: &str = "Chọn thành viên...";

/// What the app needs from the outside world.
pub struct AppFlags {
    pub directory: &'static Directory,
    pub submitter: Arc<dyn Submitter>,
}

#[derive(Debug)]
pub enum Msg {
    Key(KeyEvent),
    Paste(String),
    Resize,
    Project(select::Message),
    Member(select::Message),
    Field(FeedbackField, text_field::Message),
    Spinner(spinner::Message),
    FocusNext,
    FocusPrev,
    Sentiment(Sentiment),
    Submit,
    Submitted(Result<Ack, SubmitError>),
    Reset,
    Suspend,
    Quit,
}

/// Global key bindings, also used to draw the help bar.
struct Keys {
    next: Binding,
    prev: Binding,
    open: Binding,
    sentiment: Binding,
    submit: Binding,
    reset: Binding,
    suspend: Binding,
    quit: Binding,
}

impl Keys {
    fn new() -> Self {
        Self {
            next: Binding::new(vec![KeyCombination::new(KeyCode::Tab)], "Tab", "mục tiếp"),
            prev: Binding::new(
                vec![KeyCombination::new(KeyCode::BackTab)],
                "Shift+Tab",
                "mục trước",
            ),
            open: Binding::new(
                vec![KeyCombination::new(KeyCode::Enter), KeyCombination::new(KeyCode::Char(' '))],
                "Enter",
                "chọn",
            ),
            sentiment: Binding::new(
                vec![KeyCombination::new(KeyCode::Left), KeyCombination::new(KeyCode::Right)],
                "←/→ 1-3",
                "cảm nhận",
            ),
            submit: Binding::new(vec![KeyCombination::ctrl(KeyCode::Char('s'))], "Ctrl+S", "gửi"),
            reset: Binding::new(
                vec![KeyCombination::new(KeyCode::Enter), KeyCombination::new(KeyCode::Char('r'))],
                "Enter/r",
                "review người khác",
            ),
            suspend: Binding::new(vec![KeyCombination::ctrl(KeyCode::Char('z'))], "Ctrl+Z", "tạm dừng"),
            quit: Binding::new(
                vec![KeyCombination::ctrl(KeyCode::Char('c')), KeyCombination::new(KeyCode::Esc)],
                "Esc",
                "thoát",
            ),
        }
    }
}

pub struct ReviewApp {
    directory: &'static Directory,
    submitter: Arc<dyn Submitter>,
    session: ReviewSession,
    project: Select,
    member: Select,
    /// Project whose members the member picker currently lists.
    member_options_for: Option<String>,
    fields: [TextField; 3],
    focus: FocusGroup<SLOTS>,
    spinner: Spinner,
    keys: Keys,
}

fn project_options(directory: &Directory) -> Vec<SelectOption> {
    directory
        .projects()
        .iter()
        .map(|p| SelectOption::new(p.id.as_str(), p.name.as_str()))
        .collect()
}

fn member_options(directory: &Directory, project_id: Option<&str>) -> Vec<SelectOption> {
    directory
        .members(project_id)
        .into_iter()
        .map(|m| SelectOption::new(m.id.as_str(), m.display_name()))
        .collect()
}

/// Whether focus may rest on `slot` given the current selection. Feedback
/// controls only exist once someone has been picked.
fn slot_enabled(selection: &Selection, slot: usize) -> bool {
    match slot {
        PROJECT => true,
        MEMBER => selection.project_id().is_some(),
        _ => selection.is_complete(),
    }
}

fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

impl ReviewApp {
    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    pub fn focused_slot(&self) -> usize {
        self.focus.focused()
    }

    fn field_slot(field: FeedbackField) -> usize {
        FIRST_FIELD
            + FeedbackField::ALL
                .iter()
                .position(|f| *f == field)
                .unwrap_or_default()
    }

    fn field_at(slot: usize) -> Option<FeedbackField> {
        slot.checked_sub(FIRST_FIELD)
            .and_then(|i| FeedbackField::ALL.get(i).copied())
    }

    fn open_select(&self) -> Option<usize> {
        if self.project.is_open() {
            Some(PROJECT)
        } else if self.member.is_open() {
            Some(MEMBER)
        } else {
            None
        }
    }

    /// Feed an action to the session, then bring widgets and side effects in
    /// line with the result.
    fn dispatch(&mut self, action: Action) -> Command<Msg> {
        let effect = self.session.apply(action);
        self.sync_widgets();
        match effect {
            Effect::None => Command::none(),
            Effect::Submit(review) => {
                self.spinner.start();
                Command::perform(self.submitter.submit(review), Msg::Submitted)
            }
            Effect::ScrollToTop => {
                self.focus.focus(PROJECT);
                self.sync_focus();
                Command::none()
            }
        }
    }

    fn sync_widgets(&mut self) {
        let selection = self.session.selection().clone();

        self.project.set_value(selection.project_id());

        if self.member_options_for.as_deref() != selection.project_id() {
            self.member
                .set_options(member_options(self.directory, selection.project_id()));
            self.member_options_for = selection.project_id().map(str::to_string);
        }
        self.member.set_disabled(selection.project_id().is_none());
        self.member.set_value(selection.member_id());

        for (widget, field) in self.fields.iter_mut().zip(FeedbackField::ALL) {
            let text = self.session.form().field(field);
            if widget.value() != text {
                widget.set_value(text);
            }
        }

        if self.session.phase() != Phase::Submitting {
            self.spinner.stop();
        }

        if !slot_enabled(&selection, self.focus.focused()) {
            let fallback = if selection.project_id().is_some() { MEMBER } else { PROJECT };
            self.focus.focus(fallback);
        }
        self.sync_focus();
    }

    /// Give keyboard focus to exactly the widget under the focused slot.
    fn sync_focus(&mut self) {
        let focused = self.focus.focused();
        let editable = self.session.phase() == Phase::Idle;

        if focused == PROJECT && editable {
            self.project.focus();
        } else {
            self.project.blur();
        }
        if focused == MEMBER && editable {
            self.member.focus();
        } else {
            self.member.blur();
        }
        for (i, field) in self.fields.iter_mut().enumerate() {
            if focused == FIRST_FIELD + i && editable {
                field.focus();
            } else {
                field.blur();
            }
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let selection = self.session.selection();
        self.focus
            .focus_next_where(forward, |slot| slot_enabled(selection, slot));
        self.sync_focus();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Msg> {
        if !is_press(&key) {
            return Command::none();
        }

        // An open dropdown gets first claim on plain keys, including Esc.
        if let Some(slot) = self.open_select() {
            let passes_through = key.modifiers.contains(KeyModifiers::CONTROL)
                || matches!(key.code, KeyCode::Tab | KeyCode::BackTab);
            if !passes_through {
                return self.forward_key(slot, key);
            }
        }

        if self.keys.quit.matches(&key) {
            return Command::message(Msg::Quit);
        }
        if self.keys.suspend.matches(&key) {
            return Command::message(Msg::Suspend);
        }
        if self.keys.submit.matches(&key) {
            return Command::message(Msg::Submit);
        }

        match self.session.phase() {
            Phase::Submitting => Command::none(),
            Phase::Succeeded => {
                if self.keys.reset.matches(&key) {
                    Command::message(Msg::Reset)
                } else {
                    Command::none()
                }
            }
            Phase::Idle => {
                if self.keys.prev.matches(&key) {
                    return Command::message(Msg::FocusPrev);
                }
                if self.keys.next.matches(&key) {
                    return Command::message(Msg::FocusNext);
                }
                self.forward_key(self.focus.focused(), key)
            }
        }
    }

    fn forward_key(&mut self, slot: usize, key: KeyEvent) -> Command<Msg> {
        match slot {
            PROJECT => self
                .project
                .update(select::Message::KeyPress(key))
                .map(Msg::Project),
            MEMBER => self
                .member
                .update(select::Message::KeyPress(key))
                .map(Msg::Member),
            SENTIMENT => self.sentiment_key(key),
            SUBMIT if self.keys.open.matches(&key) => Command::message(Msg::Submit),
            slot => match Self::field_at(slot) {
                Some(field) => self.fields[slot - FIRST_FIELD]
                    .update(text_field::Message::KeyPress(key))
                    .map(move |m| Msg::Field(field, m)),
                None => Command::none(),
            },
        }
    }

    fn sentiment_key(&self, key: KeyEvent) -> Command<Msg> {
        let current = self.session.form().sentiment();
        let level = match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => match c
                .to_digit(10)
                .and_then(|d| d.checked_sub(1))
                .and_then(|i| Sentiment::ALL.get(i as usize))
            {
                Some(&level) => level,
                None => return Command::none(),
            },
            KeyCode::Right => current.map_or(Sentiment::Excellent, |s| s.cycle(true)),
            KeyCode::Left => current.map_or(Sentiment::ImprovementNeeded, |s| s.cycle(false)),
            KeyCode::Enter | KeyCode::Char(' ') if current.is_none() => Sentiment::Excellent,
            _ => return Command::none(),
        };
        Command::message(Msg::Sentiment(level))
    }
}

impl Model for ReviewApp {
    type Message = Msg;
    type Flags = AppFlags;

    fn init(flags: AppFlags) -> (Self, Command<Msg>) {
        let directory = flags.directory;
        let project = Select::new(project_options(directory)).with_placeholder(PROJECT_PLACEHOLDER);
        let member = Select::new(Vec::new()).with_placeholder(MEMBER_PLACEHOLDER);
        let fields = FeedbackField::ALL
            .map(|f| TextField::new(f.label()).with_placeholder(f.placeholder()));

        let mut app = ReviewApp {
            directory,
            submitter: flags.submitter,
            session: ReviewSession::new(),
            project,
            member,
            member_options_for: None,
            fields,
            focus: FocusGroup::new(),
            spinner: Spinner::new("submit-spinner").with_title(view::SUBMITTING_LABEL),
            keys: Keys::new(),
        };
        app.sync_widgets();

        tracing::info!(projects = directory.projects().len(), "review form ready");
        (app, Command::none())
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::Paste(text) => match Self::field_at(self.focus.focused()) {
                Some(field) if self.session.phase() == Phase::Idle => {
                    self.update(Msg::Field(field, text_field::Message::Paste(text)))
                }
                _ => Command::none(),
            },
            Msg::Resize => Command::none(),

            Msg::Project(select::Message::Selected(id)) => self.dispatch(Action::SelectProject(id)),
            Msg::Project(m) => self.project.update(m).map(Msg::Project),
            Msg::Member(select::Message::Selected(id)) => self.dispatch(Action::SelectMember(id)),
            Msg::Member(m) => self.member.update(m).map(Msg::Member),

            Msg::Field(field, text_field::Message::Changed(text)) => {
                self.dispatch(Action::EditField(field, text))
            }
            Msg::Field(field, m) => self.fields[Self::field_slot(field) - FIRST_FIELD]
                .update(m)
                .map(move |m| Msg::Field(field, m)),

            Msg::Spinner(m) => self.spinner.update(m).map(Msg::Spinner),

            Msg::FocusNext => {
                self.move_focus(true);
                Command::none()
            }
            Msg::FocusPrev => {
                self.move_focus(false);
                Command::none()
            }
            Msg::Sentiment(level) => self.dispatch(Action::SelectSentiment(level)),
            Msg::Submit => self.dispatch(Action::Submit),
            Msg::Submitted(outcome) => self.dispatch(Action::Completed(outcome)),
            Msg::Reset => self.dispatch(Action::Reset),
            Msg::Suspend => Command::suspend(),
            Msg::Quit => {
                tracing::info!("quit requested");
                Command::quit()
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        view::render(self, frame);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => Some(Msg::Key(key)),
            TerminalEvent::Paste(text) => Some(Msg::Paste(text)),
            TerminalEvent::Resize(..) => Some(Msg::Resize),
        })];
        subs.extend(
            self.spinner
                .subscriptions()
                .into_iter()
                .map(|s| s.map(Msg::Spinner)),
        );
        subs
    }
}

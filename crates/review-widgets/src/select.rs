//! Single-choice picker: a one-line trigger plus a [`Dropdown`] overlay.
//!
//! Each option pairs a stable `value` (an id) with the `label` the user sees.
//! Choosing an option emits [`Message::Selected`] with the value, so the
//! owner never has to map display text back to ids.

use crate::dropdown::{self, Dropdown, DropdownStyle};
use review_runtime::command::Command;
use review_runtime::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// One entry in a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value reported on selection.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Messages for the select component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the select component.
    KeyPress(KeyEvent),
    /// Emitted when the user picks an option, carrying its value.
    Selected(String),
}

/// A picker presenting options in a collapsible overlay.
pub struct Select {
    options: Vec<SelectOption>,
    selected: Option<usize>,
    dropdown: Dropdown,
    focus: bool,
    disabled: bool,
    placeholder: String,
    style: SelectStyle,
}

/// Visual style configuration for the [`Select`] component.
#[derive(Debug, Clone)]
pub struct SelectStyle {
    /// Style of the chosen option on the trigger line.
    pub value: Style,
    /// Style of the placeholder when nothing is chosen.
    pub placeholder: Style,
    /// Trigger style while disabled.
    pub disabled: Style,
    /// Style of the highlighted option inside the overlay.
    pub highlighted: Style,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            value: Style::default().add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            highlighted: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Select {
    /// Create a new select over the given options with nothing chosen.
    pub fn new(options: Vec<SelectOption>) -> Self {
        let style = SelectStyle::default();
        let mut dropdown = Dropdown::new()
            .with_max_visible(8)
            .with_style(DropdownStyle {
                item: Style::default(),
                highlighted_item: style.highlighted,
            })
            .with_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        dropdown.set_items(options.iter().map(|o| o.label.clone()).collect());

        Self {
            options,
            selected: None,
            dropdown,
            focus: false,
            disabled: false,
            placeholder: String::new(),
            style,
        }
    }

    /// Set the placeholder text shown when no option is chosen.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the options. Clears the current choice and closes the overlay.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.dropdown
            .set_items(options.iter().map(|o| o.label.clone()).collect());
        self.dropdown.hide();
        self.options = options;
        self.selected = None;
    }

    /// Mark the option with `value` as chosen without emitting a message.
    /// `None`, or a value not among the options, clears the choice.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.selected = value.and_then(|v| self.options.iter().position(|o| o.value == v));
    }

    /// A disabled select ignores keys and renders dimmed.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.dropdown.hide();
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Give this select component keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus and close the overlay.
    pub fn blur(&mut self) {
        self.focus = false;
        self.dropdown.hide();
    }

    /// Whether the overlay is open.
    pub fn is_open(&self) -> bool {
        self.dropdown.is_visible()
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Value of the chosen option, if any.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_option().map(|o| o.value.as_str())
    }

    /// Label of the chosen option, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_option().map(|o| o.label.as_str())
    }

    fn selected_option(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    fn open(&mut self) {
        self.dropdown.show();
        self.dropdown.highlight(self.selected.unwrap_or(0));
    }
}

impl Component for Select {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        let Message::KeyPress(key) = msg else {
            return Command::none();
        };
        if !self.focus || self.disabled {
            return Command::none();
        }

        if !self.dropdown.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down) {
                self.open();
            }
            return Command::none();
        }

        match self.dropdown.update(dropdown::Message::KeyPress(key)).into_message() {
            Some(dropdown::Message::Chosen(idx)) => match self.options.get(idx) {
                Some(option) => {
                    self.selected = Some(idx);
                    Command::message(Message::Selected(option.value.clone()))
                }
                None => Command::none(),
            },
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let text = match self.selected_label() {
            _ if self.disabled => Span::styled(self.placeholder.as_str(), self.style.disabled),
            Some(label) => Span::styled(label, self.style.value),
            None => Span::styled(self.placeholder.as_str(), self.style.placeholder),
        };

        let arrow = if self.is_open() { " ▾" } else { " ▸" };
        let line = Line::from(vec![
            text,
            Span::styled(arrow, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl Select {
    /// Draw the open overlay anchored to `anchor`.
    ///
    /// Kept separate from [`view`](Component::view) so the owner can draw it
    /// last, on top of everything rendered after the trigger line.
    pub fn view_overlay(&self, frame: &mut Frame, anchor: Rect) {
        self.dropdown.view(frame, anchor);
    }
}

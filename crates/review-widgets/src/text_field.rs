//! Multi-line free-text field with a label, placeholder, and soft wrapping.
//!
//! Content is stored exactly as typed: no trimming, no length limit, any
//! characters. Every edit emits [`Message::Changed`] with the full value so
//! the owner can mirror it into its own state.

use crate::chrome::focus_block;
use review_runtime::command::Command;
use review_runtime::component::Component;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

/// Messages for the text field component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keyboard event.
    KeyPress(KeyEvent),
    /// Insert pasted text at the cursor.
    Paste(String),
    /// Emitted when content changes, carrying the whole value.
    Changed(String),
}

/// A labelled multi-line text editor.
pub struct TextField {
    label: String,
    placeholder: String,
    lines: Vec<Vec<char>>,
    cursor_row: usize,
    cursor_col: usize,
    focus: bool,
}

impl TextField {
    /// Create an empty field with a border label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: String::new(),
            lines: vec![Vec::new()],
            cursor_row: 0,
            cursor_col: 0,
            focus: false,
        }
    }

    /// Text shown dimmed while the field is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn focus(&mut self) {
        self.focus = true;
    }

    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// The full content, lines joined with `\n`.
    pub fn value(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_value(&mut self, content: &str) {
        self.lines = content.split('\n').map(|l| l.chars().collect()).collect();
        self.cursor_row = self.lines.len() - 1;
        self.cursor_col = self.lines[self.cursor_row].len();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '\r' => {}
                '\n' => self.insert_newline(),
                c => {
                    self.lines[self.cursor_row].insert(self.cursor_col, c);
                    self.cursor_col += 1;
                }
            }
        }
    }

    fn insert_newline(&mut self) {
        let rest = self.lines[self.cursor_row].split_off(self.cursor_col);
        self.cursor_row += 1;
        self.cursor_col = 0;
        self.lines.insert(self.cursor_row, rest);
    }

    fn backspace(&mut self) -> bool {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
            self.lines[self.cursor_row].remove(self.cursor_col);
            true
        } else if self.cursor_row > 0 {
            let line = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].len();
            self.lines[self.cursor_row].extend(line);
            true
        } else {
            false
        }
    }

    fn delete(&mut self) -> bool {
        if self.cursor_col < self.lines[self.cursor_row].len() {
            self.lines[self.cursor_row].remove(self.cursor_col);
            true
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].extend(next);
            true
        } else {
            false
        }
    }

    fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].len();
        }
    }

    fn move_right(&mut self) {
        if self.cursor_col < self.lines[self.cursor_row].len() {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    fn move_vertical(&mut self, down: bool) {
        if down && self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
        } else if !down && self.cursor_row > 0 {
            self.cursor_row -= 1;
        }
        self.cursor_col = self.cursor_col.min(self.lines[self.cursor_row].len());
    }

    fn changed(&self) -> Command<Message> {
        Command::message(Message::Changed(self.value()))
    }

    fn render_lines(&self) -> Vec<Line<'_>> {
        let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
        self.lines
            .iter()
            .enumerate()
            .map(|(row, chars)| {
                if !self.focus || row != self.cursor_row {
                    return Line::from(chars.iter().collect::<String>());
                }
                let before: String = chars[..self.cursor_col].iter().collect();
                let at = chars
                    .get(self.cursor_col)
                    .map_or_else(|| " ".to_string(), |c| c.to_string());
                let after: String = chars
                    .get(self.cursor_col + 1..)
                    .map(|rest| rest.iter().collect())
                    .unwrap_or_default();
                Line::from(vec![
                    Span::raw(before),
                    Span::styled(at, cursor_style),
                    Span::raw(after),
                ])
            })
            .collect()
    }
}

impl Component for TextField {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if !self.focus {
            return Command::none();
        }
        match msg {
            Message::Paste(text) => {
                self.insert_str(&text);
                self.changed()
            }
            Message::KeyPress(key) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return Command::none();
                }
                match key.code {
                    KeyCode::Char(c) => {
                        self.lines[self.cursor_row].insert(self.cursor_col, c);
                        self.cursor_col += 1;
                        self.changed()
                    }
                    KeyCode::Enter => {
                        self.insert_newline();
                        self.changed()
                    }
                    KeyCode::Backspace if self.backspace() => self.changed(),
                    KeyCode::Delete if self.delete() => self.changed(),
                    KeyCode::Left => {
                        self.move_left();
                        Command::none()
                    }
                    KeyCode::Right => {
                        self.move_right();
                        Command::none()
                    }
                    KeyCode::Up => {
                        self.move_vertical(false);
                        Command::none()
                    }
                    KeyCode::Down => {
                        self.move_vertical(true);
                        Command::none()
                    }
                    KeyCode::Home => {
                        self.cursor_col = 0;
                        Command::none()
                    }
                    KeyCode::End => {
                        self.cursor_col = self.lines[self.cursor_row].len();
                        Command::none()
                    }
                    _ => Command::none(),
                }
            }
            Message::Changed(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let block = focus_block(&self.label, self.focus);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.is_empty() && !self.focus {
            let placeholder = Paragraph::new(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .wrap(Wrap { trim: true });
            frame.render_widget(placeholder, inner);
            return;
        }

        // Keep the cursor row on screen; wrapped rows may still push it lower.
        let height = inner.height.max(1) as usize;
        let scroll = self.cursor_row.saturating_sub(height - 1) as u16;
        let paragraph = Paragraph::new(self.render_lines())
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, inner);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn focused_field() -> TextField {
        let mut field = TextField::new("Keep Doing (Tiếp tục phát huy)");
        field.focus();
        field
    }

    fn type_str(field: &mut TextField, s: &str) -> Option<String> {
        let mut last = None;
        for c in s.chars() {
            if let Some(Message::Changed(v)) = field.update(key(KeyCode::Char(c))).into_message() {
                last = Some(v);
            }
        }
        last
    }

    #[test]
    fn typing_emits_full_value() {
        let mut field = focused_field();
        assert_eq!(type_str(&mut field, "Tốt"), Some("Tốt".to_string()));
        assert_eq!(field.cursor(), (0, 3));
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        let mut field = focused_field();
        type_str(&mut field, "  a  ");
        assert_eq!(field.value(), "  a  ");
    }

    #[test]
    fn enter_splits_lines() {
        let mut field = focused_field();
        type_str(&mut field, "ab");
        field.update(key(KeyCode::Left));
        let cmd = field.update(key(KeyCode::Enter));
        assert!(matches!(cmd.into_message(), Some(Message::Changed(v)) if v == "a\nb"));
        assert_eq!(field.cursor(), (1, 0));
    }

    #[test]
    fn backspace_joins_lines() {
        let mut field = focused_field();
        field.set_value("a\nb");
        field.update(key(KeyCode::Home));
        field.update(key(KeyCode::Backspace));
        assert_eq!(field.value(), "ab");
        assert_eq!(field.cursor(), (0, 1));
    }

    #[test]
    fn backspace_at_start_is_silent() {
        let mut field = focused_field();
        assert!(field.update(key(KeyCode::Backspace)).is_none());
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut field = focused_field();
        field.set_value("xy");
        field.update(key(KeyCode::Home));
        field.update(key(KeyCode::Delete));
        assert_eq!(field.value(), "y");
    }

    #[test]
    fn paste_keeps_newlines_and_drops_cr() {
        let mut field = focused_field();
        let cmd = field.update(Message::Paste("một\r\nhai".into()));
        assert!(matches!(cmd.into_message(), Some(Message::Changed(v)) if v == "một\nhai"));
    }

    #[test]
    fn unfocused_ignores_input() {
        let mut field = TextField::new("Stop Doing");
        assert!(field.update(key(KeyCode::Char('x'))).is_none());
        assert!(field.is_empty());
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut field = focused_field();
        field.set_value("long line\nab");
        field.update(key(KeyCode::Up));
        assert_eq!(field.cursor(), (0, 2));
        field.update(key(KeyCode::End));
        field.update(key(KeyCode::Down));
        assert_eq!(field.cursor(), (1, 2));
    }
}

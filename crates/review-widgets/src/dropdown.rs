//! Overlay list of labels anchored below a trigger area.
//!
//! The dropdown owns navigation only; what the labels mean is up to the
//! owner. [`Select`](crate::select::Select) pairs it with option values.

use crate::selection::SelectionState;
use crate::truncate_to_width;
use review_runtime::command::Command;
use review_runtime::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

/// Style configuration for the dropdown.
#[derive(Debug, Clone)]
pub struct DropdownStyle {
    /// Style for unhighlighted items.
    pub item: Style,
    /// Style for the item under the cursor.
    pub highlighted_item: Style,
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self {
            item: Style::default(),
            highlighted_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Messages for the dropdown component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the dropdown.
    KeyPress(KeyEvent),
    /// The item at this index was chosen with Enter.
    Chosen(usize),
    /// The dropdown was dismissed (Esc pressed).
    Dismissed,
}

/// An overlay list of selectable labels.
pub struct Dropdown {
    items: Vec<String>,
    selection: SelectionState,
    max_visible: usize,
    style: DropdownStyle,
    visible: bool,
    block: Option<Block<'static>>,
}

impl Dropdown {
    /// Create a new, hidden, empty dropdown.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selection: SelectionState::new(0, 8),
            max_visible: 8,
            style: DropdownStyle::default(),
            visible: false,
            block: None,
        }
    }

    /// Set the maximum number of visible items before scrolling.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self.selection.set_visible(self.max_visible);
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: DropdownStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the block (border/title container) for the overlay.
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Replace the items. The cursor returns to the first item; visibility
    /// is left unchanged.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selection.reset(self.items.len());
    }

    /// Show the dropdown.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the dropdown.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the dropdown is currently drawn.
    pub fn is_visible(&self) -> bool {
        self.visible && !self.items.is_empty()
    }

    /// Get the items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Index of the item under the cursor.
    pub fn highlighted(&self) -> usize {
        self.selection.cursor()
    }

    /// Move the cursor to `index` (clamped).
    pub fn highlight(&mut self, index: usize) {
        self.selection.select(index);
    }
}

impl Default for Dropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Dropdown {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        let Message::KeyPress(key) = msg else {
            return Command::none();
        };
        match key.code {
            KeyCode::Esc => {
                self.visible = false;
                Command::message(Message::Dismissed)
            }
            KeyCode::Up => {
                self.selection.move_up();
                Command::none()
            }
            KeyCode::Down => {
                self.selection.move_down();
                Command::none()
            }
            KeyCode::Home => {
                self.selection.home();
                Command::none()
            }
            KeyCode::End => {
                self.selection.end();
                Command::none()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let idx = self.selection.cursor();
                if idx < self.items.len() {
                    self.visible = false;
                    Command::message(Message::Chosen(idx))
                } else {
                    Command::none()
                }
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, anchor: Rect) {
        if !self.is_visible() {
            return;
        }

        let visible_count = self.items.len().min(self.max_visible);
        let chrome = if self.block.is_some() { 2 } else { 0 };
        let dropdown_height = visible_count as u16 + chrome;

        let y = anchor.y.saturating_add(anchor.height);
        let dropdown_area =
            Rect::new(anchor.x, y, anchor.width, dropdown_height).intersection(frame.area());

        if dropdown_area.height == 0 || dropdown_area.width < 4 {
            return;
        }

        frame.render_widget(Clear, dropdown_area);

        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(dropdown_area);
            frame.render_widget(block.clone(), dropdown_area);
            inner
        } else {
            dropdown_area
        };

        let offset = self.selection.offset();
        let rows = visible_count.min(inner.height as usize);
        for (i, item) in self.items.iter().skip(offset).take(rows).enumerate() {
            let row_area = Rect {
                y: inner.y + i as u16,
                height: 1,
                ..inner
            };

            let is_highlighted = i + offset == self.selection.cursor();
            let (style, prefix) = if is_highlighted {
                (self.style.highlighted_item, "▸ ")
            } else {
                (self.style.item, "  ")
            };

            let max_text_width = row_area.width.saturating_sub(2) as usize;
            let display = format!("{prefix}{}", truncate_to_width(item, max_text_width));
            frame.render_widget(Paragraph::new(Span::styled(display, style)), row_area);
        }
    }

    fn focused(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn projects() -> Dropdown {
        let mut dropdown = Dropdown::new();
        dropdown.set_items(vec![
            "Mobile App Redesign (Q3)".into(),
            "Backend Migration API".into(),
            "Design System Implementation".into(),
        ]);
        dropdown.show();
        dropdown
    }

    #[test]
    fn new_is_hidden() {
        let dropdown = Dropdown::new();
        assert!(!dropdown.is_visible());
        assert!(dropdown.items().is_empty());
    }

    #[test]
    fn empty_items_stay_hidden_when_shown() {
        let mut dropdown = Dropdown::new();
        dropdown.show();
        assert!(!dropdown.is_visible());
    }

    #[test]
    fn navigation_wraps() {
        let mut dropdown = projects();
        dropdown.update(key(KeyCode::Up));
        assert_eq!(dropdown.highlighted(), 2);
        dropdown.update(key(KeyCode::Down));
        assert_eq!(dropdown.highlighted(), 0);
    }

    #[test]
    fn enter_chooses_and_hides() {
        let mut dropdown = projects();
        dropdown.highlight(1);
        let cmd = dropdown.update(key(KeyCode::Enter));
        assert!(matches!(cmd.into_message(), Some(Message::Chosen(1))));
        assert!(!dropdown.is_visible());
    }

    #[test]
    fn esc_dismisses() {
        let mut dropdown = projects();
        let cmd = dropdown.update(key(KeyCode::Esc));
        assert!(matches!(cmd.into_message(), Some(Message::Dismissed)));
        assert!(!dropdown.is_visible());
    }

    #[test]
    fn set_items_resets_cursor() {
        let mut dropdown = projects();
        dropdown.highlight(2);
        dropdown.set_items(vec!["Alex Johnson".into()]);
        assert_eq!(dropdown.highlighted(), 0);
    }

    #[test]
    fn scroll_offset_follows_cursor() {
        let mut dropdown = Dropdown::new().with_max_visible(2);
        dropdown.set_items(vec!["a".into(), "b".into(), "c".into(), "d".into()]);
        dropdown.show();
        dropdown.update(key(KeyCode::Down));
        assert_eq!(dropdown.selection.offset(), 0);
        dropdown.update(key(KeyCode::Down));
        assert_eq!(dropdown.selection.offset(), 1);
        dropdown.update(key(KeyCode::End));
        assert_eq!(dropdown.selection.offset(), 2);
    }
}

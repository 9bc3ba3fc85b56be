//! Border helpers shared by the form's widgets.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders};

/// A rounded, titled block whose border is cyan when focused and dark gray
/// otherwise.
pub fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(color))
}

/// A block drawn in an explicit accent color, used for cards whose color
/// carries meaning (e.g. a sentiment).
pub fn accent_block(title: &str, accent: Color, emphasized: bool) -> Block<'_> {
    let border_type = if emphasized {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    Block::new()
        .borders(Borders::ALL)
        .border_type(border_type)
        .title(title)
        .border_style(Style::default().fg(accent))
}

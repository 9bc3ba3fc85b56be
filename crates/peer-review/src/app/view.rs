//! Drawing the form and confirmation screens.
//!
//! The form is taller than most terminals. Instead of a free scroll offset,
//! the body starts at the first section that still lets the focused section
//! fit, so tabbing through the form always keeps the cursor on screen and
//! moving focus back to the top scrolls back to the top.

use super::{ReviewApp, FIRST_FIELD, MEMBER, MEMBER_LABEL, PROJECT, PROJECT_LABEL, SENTIMENT, SUBMIT};
use crate::sentiment::Sentiment;
use crate::session::Phase;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;
use review_runtime::Component;
use review_widgets::chrome::{accent_block, focus_block};
use review_widgets::key::help_line;

const BADGE: &str = "✦ Internal Peer Review";
const TITLE: &str = "Đánh giá đồng đội";
const SUBTITLE: &str = "Góp ý chân thành giúp chúng ta đi xa hơn cùng nhau.";
const FOOTER: &str = "Secure & Anonymous Feedback System";
const PROMPT: &str = "👋 Chọn dự án và thành viên để bắt đầu review nhé";
const SENTIMENT_QUESTION: &str = "Cảm nhận chung của bạn về đồng đội này? *";
const HINT: &str = "Vui lòng hoàn thành ít nhất một mục nhận xét & chọn cảm nhận";
const SUBMIT_LABEL: &str = "Gửi đánh giá";
pub(super) const SUBMITTING_LABEL: &str = "Đang gửi đánh giá...";
const SUCCESS_TITLE: &str = "Đánh giá thành công";
const SUCCESS_LINES: [&str; 2] = [
    "Cảm ơn bạn đã dành thời gian.",
    "Những chia sẻ của bạn rất quý giá!",
];
const RESET_LABEL: &str = "Review người khác";

const ACCENT: Color = Color::Cyan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Selection,
    Prompt,
    Field(usize),
    Sentiment,
    Submit,
}

impl Section {
    fn height(self) -> u16 {
        match self {
            Section::Selection | Section::Prompt => 3,
            Section::Field(_) | Section::Sentiment | Section::Submit => 5,
        }
    }
}

pub(super) fn render(app: &ReviewApp, frame: &mut Frame) {
    let [header, body, help, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    match app.session.phase() {
        Phase::Succeeded => render_success(frame, body),
        Phase::Idle | Phase::Submitting => render_form(app, frame, body),
    }
    render_help(app, frame, help);
    frame.render_widget(
        Paragraph::new(Span::styled(FOOTER, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        footer,
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(BADGE, Style::default().fg(ACCENT))),
        Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn sections(app: &ReviewApp) -> Vec<Section> {
    if !app.session.selection().is_complete() {
        return vec![Section::Selection, Section::Prompt];
    }
    vec![
        Section::Selection,
        Section::Field(0),
        Section::Field(1),
        Section::Field(2),
        Section::Sentiment,
        Section::Submit,
    ]
}

fn section_of_slot(slot: usize) -> Section {
    match slot {
        PROJECT | MEMBER => Section::Selection,
        SENTIMENT => Section::Sentiment,
        SUBMIT => Section::Submit,
        slot => Section::Field(slot - FIRST_FIELD),
    }
}

/// Index of the first section to draw so that everything from it through
/// `focused` fits in `available` rows.
fn first_visible(sections: &[Section], focused: usize, available: u16) -> usize {
    let mut start = 0;
    while start < focused {
        let needed: u16 = sections[start..=focused].iter().map(|s| s.height()).sum();
        if needed <= available {
            break;
        }
        start += 1;
    }
    start
}

fn render_form(app: &ReviewApp, frame: &mut Frame, area: Rect) {
    let sections = sections(app);
    let focused = sections
        .iter()
        .position(|s| *s == section_of_slot(app.focus.focused()))
        .unwrap_or(0);
    let start = first_visible(&sections, focused, area.height);

    let mut y = area.y;
    let mut anchors = None;
    for section in &sections[start..] {
        let height = section.height();
        if y + height > area.bottom() {
            break;
        }
        let rect = Rect::new(area.x, y, area.width, height);
        y += height;

        match *section {
            Section::Selection => anchors = Some(render_selection(app, frame, rect)),
            Section::Prompt => render_prompt(frame, rect),
            Section::Field(i) => app.fields[i].view(frame, rect),
            Section::Sentiment => render_sentiment(app, frame, rect),
            Section::Submit => render_submit(app, frame, rect),
        }
    }

    // Overlays last so they sit on top of whatever follows the pickers.
    if let Some((project_anchor, member_anchor)) = anchors {
        app.project.view_overlay(frame, project_anchor);
        app.member.view_overlay(frame, member_anchor);
    }
}

fn render_selection(app: &ReviewApp, frame: &mut Frame, area: Rect) -> (Rect, Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let block = focus_block(PROJECT_LABEL, app.project.focused());
    let project_inner = block.inner(left);
    frame.render_widget(block, left);
    app.project.view(frame, project_inner);

    let block = focus_block(MEMBER_LABEL, app.member.focused());
    let member_inner = block.inner(right);
    frame.render_widget(block, right);
    app.member.view(frame, member_inner);

    (project_inner, member_inner)
}

fn render_prompt(frame: &mut Frame, area: Rect) {
    let prompt = Paragraph::new(Span::styled(PROMPT, Style::default().fg(Color::Gray)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let [_, line, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);
    frame.render_widget(prompt, line);
}

fn render_sentiment(app: &ReviewApp, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_focused(SENTIMENT) && app.session.phase() == Phase::Idle;
    let [question, cards] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

    let question_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(SENTIMENT_QUESTION, question_style)),
        question,
    );

    let choice = app.session.form().sentiment();
    let columns: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(cards);
    for (level, column) in Sentiment::ALL.into_iter().zip(columns) {
        render_sentiment_card(frame, column, level, choice == Some(level));
    }
}

fn render_sentiment_card(frame: &mut Frame, area: Rect, level: Sentiment, selected: bool) {
    let title = format!(" {} ", level.index() + 1);
    let block = accent_block(&title, level.accent(), selected);
    let (marker, style) = if selected {
        ("● ", Style::default().fg(level.accent()).add_modifier(Modifier::BOLD))
    } else {
        ("○ ", Style::default().fg(Color::Gray))
    };
    let text = Paragraph::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(level.accent())),
        Span::styled(level.label(), style),
    ]))
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(text, area);
}

fn render_submit(app: &ReviewApp, frame: &mut Frame, area: Rect) {
    let [hint, error, button_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let session = &app.session;
    if !session.is_valid() {
        let missing: Vec<_> = session.missing().iter().map(|r| r.label()).collect();
        let line = Line::from(vec![
            Span::styled(HINT, Style::default().fg(ACCENT)),
            Span::styled(
                format!(" (còn thiếu: {})", missing.join(", ")),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), hint);
    }

    if let Some(err) = session.last_error() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("Gửi thất bại: {err}"),
                Style::default().fg(Color::Red),
            ))
            .alignment(Alignment::Center),
            error,
        );
    }

    let submitting = session.phase() == Phase::Submitting;
    let focused = app.focus.is_focused(SUBMIT) && !submitting;
    let (border, text_style) = if submitting {
        (Style::default().fg(ACCENT), Style::default().fg(ACCENT))
    } else if !session.is_valid() {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else if focused {
        (
            Style::default().fg(ACCENT),
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(ACCENT),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };

    let button = centered(button_row, 40.min(button_row.width), 3);
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border);
    let inner = block.inner(button);
    frame.render_widget(block, button);

    if submitting {
        let label = format!("{} {SUBMITTING_LABEL}", app.spinner.frame());
        let width = u16::try_from(Line::from(label).width()).unwrap_or(inner.width);
        app.spinner.view(frame, centered(inner, width.min(inner.width), 1));
    } else {
        frame.render_widget(
            Paragraph::new(Span::styled(SUBMIT_LABEL, text_style)).alignment(Alignment::Center),
            inner,
        );
    }
}

fn render_success(frame: &mut Frame, area: Rect) {
    let card = centered(area, 60.min(area.width), 11.min(area.height));
    let block = accent_block("", Color::Green, true);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = vec![
        Line::from(Span::styled("✔", Style::default().fg(Color::Green))),
        Line::default(),
        Line::from(Span::styled(
            SUCCESS_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(SUCCESS_LINES.map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray)))));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[ {RESET_LABEL} ]"),
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_help(app: &ReviewApp, frame: &mut Frame, area: Rect) {
    let keys = &app.keys;
    let line = match app.session.phase() {
        Phase::Succeeded => help_line([&keys.reset, &keys.quit]),
        Phase::Submitting => help_line([&keys.quit]),
        Phase::Idle if app.focus.is_focused(SENTIMENT) => help_line([
            &keys.next,
            &keys.prev,
            &keys.sentiment,
            &keys.submit,
            &keys.quit,
        ]),
        Phase::Idle => help_line([
            &keys.next,
            &keys.prev,
            &keys.open,
            &keys.submit,
            &keys.suspend,
            &keys.quit,
        ]),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

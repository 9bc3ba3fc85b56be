//! Key bindings and the one-line help bar built from them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// A key binding that maps one or more key combinations to a described action.
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// Short label shown in the help bar, e.g. `"Tab"`.
    pub label: String,
    /// What the binding does, e.g. `"tiếp"`.
    pub description: String,
    /// Disabled bindings never match and are left out of the help bar.
    pub enabled: bool,
}

/// A single key press with optional modifier keys (Ctrl, Alt, Shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for one or more key combinations.
    pub fn new(
        keys: Vec<KeyCombination>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            label: label.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Return whether the event matches any of this binding's combinations.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    /// Set whether this binding is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }
}

/// Render enabled bindings as `label description` pairs separated by gaps.
pub fn help_line<'a>(bindings: impl IntoIterator<Item = &'a Binding>) -> Line<'a> {
    let key_style = Style::default().fg(Color::Cyan);
    let desc_style = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    for binding in bindings.into_iter().filter(|b| b.enabled) {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(binding.label.as_str(), key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(binding.description.as_str(), desc_style));
    }
    Line::from(spans)
}

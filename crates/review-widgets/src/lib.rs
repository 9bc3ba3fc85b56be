//! Terminal widgets for the peer review form.
//!
//! Every widget implements [`review_runtime::Component`], so it can be
//! embedded in a [`review_runtime::Model`] and composed within [`ratatui`]
//! layouts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`select`] | Single-choice picker with a dropdown overlay |
//! | [`dropdown`] | The overlay list used by [`select`] |
//! | [`text_field`] | Labelled multi-line text editor |
//! | [`spinner`] | Animated busy indicator |
//! | [`focus`] | [`FocusGroup`](focus::FocusGroup) for cycling focus across form slots |
//! | [`key`] | Key bindings and the help bar |
//! | [`chrome`] | Border helpers |

pub mod chrome;
pub mod dropdown;
pub mod focus;
pub mod key;
pub mod select;
pub mod selection;
pub mod spinner;
pub mod text_field;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten `text` to at most `max_width` terminal columns, ending in `...`
/// when cut. Never splits a character.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max_width >= 3 {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Sarah Chen", 20), "Sarah Chen");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_to_width("Đồng đội đích thực", 8), "Đồng ...");
    }

    #[test]
    fn tiny_width_has_no_ellipsis() {
        assert_eq!(truncate_to_width("abcdef", 2), "");
    }
}

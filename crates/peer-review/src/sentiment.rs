//! The reviewer's overall impression of a teammate.

use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

/// Overall impression, one of three fixed levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Excellent,
    Acceptable,
    ImprovementNeeded,
}

/// Error returned when a wire name is not one of the three levels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment {0:?}")]
pub struct SentimentParseError(pub String);

impl Sentiment {
    /// All levels in display order.
    pub const ALL: [Sentiment; 3] = [
        Sentiment::Excellent,
        Sentiment::Acceptable,
        Sentiment::ImprovementNeeded,
    ];

    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Excellent => "excellent",
            Sentiment::Acceptable => "acceptable",
            Sentiment::ImprovementNeeded => "improvement_needed",
        }
    }

    /// Card text shown to the reviewer.
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Excellent => "Đồng đội đích thực, hợp tác tuyệt vời",
            Sentiment::Acceptable => "Vừa đủ để đồng hành tiếp",
            Sentiment::ImprovementNeeded => "Vẫn còn những điểm cần phải cải thiện sớm",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Sentiment::Excellent => Color::Green,
            Sentiment::Acceptable => Color::Gray,
            Sentiment::ImprovementNeeded => Color::Rgb(245, 158, 11),
        }
    }

    /// Zero-based position in [`Sentiment::ALL`].
    pub fn index(self) -> usize {
        match self {
            Sentiment::Excellent => 0,
            Sentiment::Acceptable => 1,
            Sentiment::ImprovementNeeded => 2,
        }
    }

    /// The neighbouring level, wrapping at both ends.
    pub fn cycle(self, forward: bool) -> Sentiment {
        let step = if forward { 1 } else { Self::ALL.len() - 1 };
        Self::ALL[(self.index() + step) % Self::ALL.len()]
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = SentimentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| SentimentParseError(s.to_string()))
    }
}

/// Single-choice picker over the three levels.
///
/// A choice can be replaced but never withdrawn; only a form reset returns
/// the picker to "nothing chosen".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentPicker {
    choice: Option<Sentiment>,
}

impl SentimentPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, level: Sentiment) {
        self.choice = Some(level);
    }

    pub fn choice(&self) -> Option<Sentiment> {
        self.choice
    }

    pub fn is_selected(&self, level: Sentiment) -> bool {
        self.choice == Some(level)
    }

    pub fn reset(&mut self) {
        self.choice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for level in Sentiment::ALL {
            assert_eq!(level.as_str().parse::<Sentiment>(), Ok(level));
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn unknown_wire_name_is_rejected() {
        let err = "great".parse::<Sentiment>().unwrap_err();
        assert_eq!(err, SentimentParseError("great".into()));
        assert!("Excellent".parse::<Sentiment>().is_err());
    }

    #[test]
    fn display_order() {
        assert_eq!(
            Sentiment::ALL.map(Sentiment::as_str),
            ["excellent", "acceptable", "improvement_needed"]
        );
        for (i, level) in Sentiment::ALL.into_iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(Sentiment::ImprovementNeeded.cycle(true), Sentiment::Excellent);
        assert_eq!(Sentiment::Excellent.cycle(false), Sentiment::ImprovementNeeded);
        assert_eq!(Sentiment::Excellent.cycle(true), Sentiment::Acceptable);
    }

    #[test]
    fn picker_overwrites_choice() {
        let mut picker = SentimentPicker::new();
        assert_eq!(picker.choice(), None);
        picker.select(Sentiment::Acceptable);
        picker.select(Sentiment::Excellent);
        assert_eq!(picker.choice(), Some(Sentiment::Excellent));
        assert!(picker.is_selected(Sentiment::Excellent));
        assert!(!picker.is_selected(Sentiment::Acceptable));
        picker.reset();
        assert_eq!(picker.choice(), None);
    }
}

//! The three free-text questions and the sentiment choice that make up a review.

use crate::sentiment::{Sentiment, SentimentPicker};

/// One of the three free-text questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackField {
    KeepDoing,
    StartDoing,
    StopDoing,
}

impl FeedbackField {
    /// Fields in the order they appear on the form.
    pub const ALL: [FeedbackField; 3] = [
        FeedbackField::KeepDoing,
        FeedbackField::StartDoing,
        FeedbackField::StopDoing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeedbackField::KeepDoing => "Keep Doing (Tiếp tục phát huy)",
            FeedbackField::StartDoing => "Start Doing (Nên bắt đầu làm)",
            FeedbackField::StopDoing => "Stop Doing (Cần thay đổi)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FeedbackField::KeepDoing => {
                "Điều gì người này đang làm tốt? (Ví dụ: Kỹ năng giải quyết vấn đề, tinh thần teamwork...)"
            }
            FeedbackField::StartDoing => {
                "Điều gì sẽ giúp họ tốt hơn? (Ví dụ: Chủ động hơn trong meeting, chia sẻ kiến thức...)"
            }
            FeedbackField::StopDoing => "Điều gì đang gây trở ngại cho công việc chung?",
        }
    }
}

/// Review content being composed.
///
/// Text is stored exactly as entered. Trimming only happens when deciding
/// whether any feedback was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    keep_doing: String,
    start_doing: String,
    stop_doing: String,
    sentiment: SentimentPicker,
}

impl ReviewForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content of `field` verbatim.
    pub fn set_field(&mut self, field: FeedbackField, text: impl Into<String>) {
        *self.slot_mut(field) = text.into();
    }

    pub fn field(&self, field: FeedbackField) -> &str {
        match field {
            FeedbackField::KeepDoing => &self.keep_doing,
            FeedbackField::StartDoing => &self.start_doing,
            FeedbackField::StopDoing => &self.stop_doing,
        }
    }

    pub fn select_sentiment(&mut self, level: Sentiment) {
        self.sentiment.select(level);
    }

    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment.choice()
    }

    /// True when at least one question has non-whitespace content.
    pub fn has_text_feedback(&self) -> bool {
        FeedbackField::ALL
            .into_iter()
            .any(|f| !self.field(f).trim().is_empty())
    }

    /// Back to empty texts and no sentiment.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, field: FeedbackField) -> &mut String {
        match field {
            FeedbackField::KeepDoing => &mut self.keep_doing,
            FeedbackField::StartDoing => &mut self.start_doing,
            FeedbackField::StopDoing => &mut self.stop_doing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let form = ReviewForm::new();
        for field in FeedbackField::ALL {
            assert_eq!(form.field(field), "");
        }
        assert_eq!(form.sentiment(), None);
        assert!(!form.has_text_feedback());
    }

    #[test]
    fn set_field_keeps_text_verbatim() {
        let mut form = ReviewForm::new();
        form.set_field(FeedbackField::StartDoing, "  share more  \n");
        assert_eq!(form.field(FeedbackField::StartDoing), "  share more  \n");
        assert_eq!(form.field(FeedbackField::KeepDoing), "");
    }

    #[test]
    fn whitespace_only_is_not_feedback() {
        let mut form = ReviewForm::new();
        form.set_field(FeedbackField::KeepDoing, "   ");
        form.set_field(FeedbackField::StopDoing, "\n\t");
        assert!(!form.has_text_feedback());

        form.set_field(FeedbackField::StopDoing, " x ");
        assert!(form.has_text_feedback());
    }

    #[test]
    fn any_single_field_counts() {
        for field in FeedbackField::ALL {
            let mut form = ReviewForm::new();
            form.set_field(field, "Great teamwork");
            assert!(form.has_text_feedback(), "{field:?}");
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = ReviewForm::new();
        form.set_field(FeedbackField::KeepDoing, "a");
        form.select_sentiment(Sentiment::ImprovementNeeded);
        form.reset();
        assert_eq!(form, ReviewForm::default());
    }

    #[test]
    fn labels_and_placeholders_differ_per_field() {
        assert_eq!(FeedbackField::KeepDoing.label(), "Keep Doing (Tiếp tục phát huy)");
        assert!(FeedbackField::ALL
            .into_iter()
            .all(|f| !f.placeholder().is_empty()));
    }
}

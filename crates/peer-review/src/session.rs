//! The review lifecycle: composing, submitting, and the confirmation screen.
//!
//! [`ReviewSession::apply`] is the only way state changes. It never performs
//! I/O itself; when a review should be sent it returns
//! [`Effect::Submit`] and the caller drives the [`Submitter`](crate::submitter::Submitter),
//! feeding the outcome back as [`Action::Completed`].
//!
//! ```text
//!          Submit (valid)            Completed(Ok)
//!   Idle ─────────────────▶ Submitting ─────────────▶ Succeeded
//!    ▲                          │                         │
//!    └──── Completed(Err) ──────┘                         │
//!    └──────────────── Reset / SelectProject ─────────────┘
//! ```

use crate::feedback::{FeedbackField, ReviewForm};
use crate::selection::{Selection, SelectionEvent};
use crate::sentiment::Sentiment;
use crate::submitter::{Ack, ReviewSubmission, SubmitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
}

/// A condition that must hold before a review can be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Project,
    Member,
    TextFeedback,
    Sentiment,
}

impl Requirement {
    pub fn label(self) -> &'static str {
        match self {
            Requirement::Project => "dự án",
            Requirement::Member => "thành viên",
            Requirement::TextFeedback => "nhận xét",
            Requirement::Sentiment => "cảm nhận",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    SelectProject(String),
    SelectMember(String),
    EditField(FeedbackField, String),
    SelectSentiment(Sentiment),
    Submit,
    /// Outcome reported by the submitter.
    Completed(Result<Ack, SubmitError>),
    Reset,
}

/// Work the caller must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Hand this review to the submitter.
    Submit(ReviewSubmission),
    /// The confirmation screen was entered; show it from the top.
    ScrollToTop,
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    selection: Selection,
    form: ReviewForm,
    phase: Phase,
    last_error: Option<String>,
    last_receipt: Option<u64>,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            selection: Selection::new(),
            form: ReviewForm::new(),
            phase: Phase::Idle,
            last_error: None,
            last_receipt: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    /// Message from the last failed submission, until the next edit or submit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Receipt of the most recent accepted review.
    pub fn last_receipt(&self) -> Option<u64> {
        self.last_receipt
    }

    /// Unmet submission requirements, in form order. Empty means valid.
    pub fn missing(&self) -> Vec<Requirement> {
        let mut missing = Vec::new();
        if self.selection.project_id().is_none() {
            missing.push(Requirement::Project);
        }
        if self.selection.member_id().is_none() {
            missing.push(Requirement::Member);
        }
        if !self.form.has_text_feedback() {
            missing.push(Requirement::TextFeedback);
        }
        if self.form.sentiment().is_none() {
            missing.push(Requirement::Sentiment);
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn apply(&mut self, action: Action) -> Effect {
        match self.phase {
            Phase::Idle => self.apply_idle(action),
            Phase::Submitting => self.apply_submitting(action),
            Phase::Succeeded => self.apply_succeeded(action),
        }
    }

    fn apply_idle(&mut self, action: Action) -> Effect {
        match action {
            Action::SelectProject(id) => {
                self.last_error = None;
                self.selection.apply(SelectionEvent::Project(id));
                tracing::info!(project = ?self.selection.project_id(), "project selected");
            }
            Action::SelectMember(id) => {
                self.last_error = None;
                self.selection.apply(SelectionEvent::Member(id));
                tracing::info!(member = ?self.selection.member_id(), "member selected");
            }
            Action::EditField(field, text) => {
                self.last_error = None;
                self.form.set_field(field, text);
            }
            Action::SelectSentiment(level) => {
                self.last_error = None;
                self.form.select_sentiment(level);
            }
            Action::Submit => {
                self.last_error = None;
                if let Some(review) = self.snapshot() {
                    tracing::info!(
                        project = %review.project_id,
                        member = %review.member_id,
                        "submitting review"
                    );
                    self.phase = Phase::Submitting;
                    return Effect::Submit(review);
                }
                tracing::debug!(missing = ?self.missing(), "submit ignored, form incomplete");
            }
            Action::Reset => self.clear(),
            Action::Completed(_) => {
                tracing::warn!("submission outcome arrived while idle, ignoring");
            }
        }
        Effect::None
    }

    fn apply_submitting(&mut self, action: Action) -> Effect {
        let outcome = match action {
            Action::Completed(outcome) => outcome,
            other => {
                tracing::debug!(action = ?other, "ignored while submitting");
                return Effect::None;
            }
        };
        match outcome {
            Ok(ack) => {
                tracing::info!(receipt = ack.receipt, "review submitted");
                self.phase = Phase::Succeeded;
                self.last_receipt = Some(ack.receipt);
                Effect::ScrollToTop
            }
            Err(err) => {
                tracing::warn!(%err, "review submission failed");
                self.phase = Phase::Idle;
                self.last_error = Some(err.to_string());
                Effect::None
            }
        }
    }

    fn apply_succeeded(&mut self, action: Action) -> Effect {
        match action {
            Action::Reset => {
                tracing::info!("starting another review");
                self.clear();
            }
            // Only the member is cleared; texts and sentiment stay for the next review.
            Action::SelectProject(id) => {
                self.selection.apply(SelectionEvent::Project(id));
                self.phase = Phase::Idle;
                tracing::info!(project = ?self.selection.project_id(), "project selected");
            }
            other => tracing::debug!(action = ?other, "ignored on confirmation screen"),
        }
        Effect::None
    }

    fn snapshot(&self) -> Option<ReviewSubmission> {
        if !self.form.has_text_feedback() {
            return None;
        }
        Some(ReviewSubmission {
            project_id: self.selection.project_id()?.to_string(),
            member_id: self.selection.member_id()?.to_string(),
            keep_doing: self.form.field(FeedbackField::KeepDoing).to_string(),
            start_doing: self.form.field(FeedbackField::StartDoing).to_string(),
            stop_doing: self.form.field(FeedbackField::StopDoing).to_string(),
            sentiment: self.form.sentiment()?,
        })
    }

    fn clear(&mut self) {
        self.selection.clear();
        self.form.reset();
        self.phase = Phase::Idle;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(project: &str, member: &str, keep: &str, level: Option<Sentiment>) -> ReviewSession {
        let mut session = ReviewSession::new();
        session.apply(Action::SelectProject(project.into()));
        session.apply(Action::SelectMember(member.into()));
        session.apply(Action::EditField(FeedbackField::KeepDoing, keep.into()));
        if let Some(level) = level {
            session.apply(Action::SelectSentiment(level));
        }
        session
    }

    fn valid() -> ReviewSession {
        filled("p1", "m1", "Great teamwork", Some(Sentiment::Excellent))
    }

    fn ack(receipt: u64) -> Action {
        Action::Completed(Ok(Ack { receipt }))
    }

    #[test]
    fn valid_review_goes_through_submitting_to_succeeded() {
        let mut session = valid();
        assert!(session.is_valid());

        let effect = session.apply(Action::Submit);
        assert_eq!(
            effect,
            Effect::Submit(ReviewSubmission {
                project_id: "p1".into(),
                member_id: "m1".into(),
                keep_doing: "Great teamwork".into(),
                start_doing: String::new(),
                stop_doing: String::new(),
                sentiment: Sentiment::Excellent,
            })
        );
        assert_eq!(session.phase(), Phase::Submitting);

        assert_eq!(session.apply(ack(7)), Effect::ScrollToTop);
        assert_eq!(session.phase(), Phase::Succeeded);
        assert_eq!(session.last_receipt(), Some(7));
    }

    #[test]
    fn missing_text_blocks_submit() {
        let mut session = filled("p1", "m2", "", Some(Sentiment::Acceptable));
        assert!(!session.is_valid());
        assert_eq!(session.missing(), vec![Requirement::TextFeedback]);
        assert_eq!(session.apply(Action::Submit), Effect::None);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn every_conjunct_is_required() {
        let cases = [
            (filled("", "m1", "x", Some(Sentiment::Excellent)), Requirement::Project),
            (filled("p1", "", "x", Some(Sentiment::Excellent)), Requirement::Member),
            (filled("p1", "m1", "  ", Some(Sentiment::Excellent)), Requirement::TextFeedback),
            (filled("p1", "m1", "x", None), Requirement::Sentiment),
        ];
        for (mut session, requirement) in cases {
            assert!(session.missing().contains(&requirement), "{requirement:?}");
            assert_eq!(session.apply(Action::Submit), Effect::None);
            assert_eq!(session.phase(), Phase::Idle);
        }
    }

    #[test]
    fn empty_session_lists_everything() {
        assert_eq!(
            ReviewSession::new().missing(),
            vec![
                Requirement::Project,
                Requirement::Member,
                Requirement::TextFeedback,
                Requirement::Sentiment
            ]
        );
    }

    #[test]
    fn changing_project_clears_member() {
        let mut session = valid();
        session.apply(Action::SelectProject("p2".into()));
        assert_eq!(session.selection().project_id(), Some("p2"));
        assert_eq!(session.selection().member_id(), None);
        assert_eq!(session.form().field(FeedbackField::KeepDoing), "Great teamwork");
        assert!(!session.is_valid());
    }

    #[test]
    fn edits_ignored_while_submitting() {
        let mut session = valid();
        session.apply(Action::Submit);

        for action in [
            Action::SelectProject("p2".into()),
            Action::SelectMember("m3".into()),
            Action::EditField(FeedbackField::StopDoing, "late".into()),
            Action::SelectSentiment(Sentiment::ImprovementNeeded),
            Action::Submit,
            Action::Reset,
        ] {
            assert_eq!(session.apply(action), Effect::None);
        }

        assert_eq!(session.phase(), Phase::Submitting);
        assert_eq!(session.selection().project_id(), Some("p1"));
        assert_eq!(session.selection().member_id(), Some("m1"));
        assert_eq!(session.form().field(FeedbackField::StopDoing), "");
        assert_eq!(session.form().sentiment(), Some(Sentiment::Excellent));
    }

    #[test]
    fn failure_returns_to_idle_keeping_data() {
        let mut session = valid();
        session.apply(Action::Submit);
        let effect = session.apply(Action::Completed(Err(SubmitError::Unavailable(
            "timeout".into(),
        ))));

        assert_eq!(effect, Effect::None);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(
            session.last_error(),
            Some("review service unavailable: timeout")
        );
        assert!(session.is_valid());
        assert_eq!(session.form().field(FeedbackField::KeepDoing), "Great teamwork");

        session.apply(Action::EditField(FeedbackField::StartDoing, "more demos".into()));
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn retry_after_failure_clears_error() {
        let mut session = valid();
        session.apply(Action::Submit);
        session.apply(Action::Completed(Err(SubmitError::Rejected("dup".into()))));
        assert!(matches!(session.apply(Action::Submit), Effect::Submit(_)));
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn reset_after_success_clears_everything() {
        let mut session = valid();
        session.apply(Action::Submit);
        session.apply(ack(1));
        session.apply(Action::Reset);

        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.selection(), &Selection::default());
        assert_eq!(session.form(), &ReviewForm::default());
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn new_project_on_confirmation_returns_to_idle_keeping_texts() {
        let mut session = valid();
        session.apply(Action::Submit);
        session.apply(ack(1));

        session.apply(Action::SelectProject("p3".into()));
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.selection().project_id(), Some("p3"));
        assert_eq!(session.selection().member_id(), None);
        assert_eq!(session.form().field(FeedbackField::KeepDoing), "Great teamwork");
        assert_eq!(session.form().sentiment(), Some(Sentiment::Excellent));
        assert_eq!(session.missing(), vec![Requirement::Member]);

        session.apply(Action::SelectMember("m6".into()));
        assert!(matches!(session.apply(Action::Submit), Effect::Submit(_)));
    }

    #[test]
    fn confirmation_ignores_form_edits() {
        let mut session = valid();
        session.apply(Action::Submit);
        session.apply(ack(1));
        session.apply(Action::EditField(FeedbackField::KeepDoing, "x".into()));
        session.apply(Action::Submit);
        assert_eq!(session.phase(), Phase::Succeeded);
        assert_eq!(session.form().field(FeedbackField::KeepDoing), "Great teamwork");
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut session = ReviewSession::new();
        assert_eq!(session.apply(ack(3)), Effect::None);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.last_receipt(), None);
    }
}

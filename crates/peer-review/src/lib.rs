//! **peer-review**: a terminal form for reviewing a teammate on a project.
//!
//! The reviewer picks a project, then someone staffed on it, answers up to
//! three free-text questions (keep / start / stop doing), chooses an overall
//! sentiment, and submits. Submission is asynchronous; a confirmation screen
//! follows, from which the whole form can be reset for the next review.
//!
//! # Layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`directory`] | Built-in projects and members |
//! | [`selection`] | Cascading project → member choice |
//! | [`sentiment`] | The three sentiment levels and their picker |
//! | [`feedback`] | Free-text answers and validity of the text part |
//! | [`session`] | Idle → Submitting → Succeeded lifecycle |
//! | [`submitter`] | Where finished reviews go |
//! | [`app`] | The [`review_runtime::Model`] tying it to the terminal |
//! | [`config`], [`logging`] | Startup plumbing for the binary |
//!
//! The domain modules know nothing about the terminal; [`session::ReviewSession`]
//! can be driven directly:
//!
//! ```
//! use peer_review::feedback::FeedbackField;
//! use peer_review::sentiment::Sentiment;
//! use peer_review::session::{Action, Effect, Phase, ReviewSession};
//!
//! let mut session = ReviewSession::new();
//! session.apply(Action::SelectProject("p1".into()));
//! session.apply(Action::SelectMember("m1".into()));
//! session.apply(Action::EditField(FeedbackField::KeepDoing, "Great teamwork".into()));
//! session.apply(Action::SelectSentiment(Sentiment::Excellent));
//!
//! assert!(matches!(session.apply(Action::Submit), Effect::Submit(_)));
//! assert_eq!(session.phase(), Phase::Submitting);
//! ```

pub mod app;
pub mod config;
pub mod directory;
pub mod feedback;
pub mod logging;
pub mod selection;
pub mod sentiment;
pub mod session;
pub mod submitter;

pub use app::{AppFlags, ReviewApp};
pub use config::{AppConfig, ConfigError};

use review_runtime::ProgramError;

/// Everything that can stop the app from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("logging setup failed: {0}")]
    Logging(#[from] logging::LoggingError),
    #[error(transparent)]
    Program(#[from] ProgramError),
}

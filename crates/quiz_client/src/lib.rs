use std::sync::Arc;

use async_trait::async_trait;
use clock_core::{
    quiz::{AnswerCheck, FALLBACK_FEEDBACK},
    QuizQuestion,
};
use tracing::warn;

pub mod error;
pub mod gemini;
pub mod prompts;

pub use error::QuizError;
pub use gemini::{GeminiConfig, GeminiQuizSource};

/// Remote collaborator that writes quiz questions and encouragement.
///
/// Implementations report every failure; [`QuizService`] decides what the
/// child sees instead.
#[async_trait]
pub trait QuizSource: Send + Sync {
    async fn request_question(&self) -> Result<QuizQuestion, QuizError>;
    async fn evaluate(&self, check: &AnswerCheck) -> Result<String, QuizError>;
}

/// Stand-in used when no AI service is configured.
pub struct UnavailableQuizSource {
    reason: String,
}

impl UnavailableQuizSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl QuizSource for UnavailableQuizSource {
    async fn request_question(&self) -> Result<QuizQuestion, QuizError> {
        Err(QuizError::Unavailable(self.reason.clone()))
    }

    async fn evaluate(&self, _check: &AnswerCheck) -> Result<String, QuizError> {
        Err(QuizError::Unavailable(self.reason.clone()))
    }
}

/// Wraps a [`QuizSource`] so callers always get content back. Failures are
/// logged and replaced with the fixed fallback question or phrase.
#[derive(Clone)]
pub struct QuizService {
    source: Arc<dyn QuizSource>,
}

impl QuizService {
    pub fn new(source: Arc<dyn QuizSource>) -> Self {
        Self { source }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::new(Arc::new(UnavailableQuizSource::new(reason)))
    }

    pub async fn request_question(&self) -> QuizQuestion {
        match self.source.request_question().await {
            Ok(question) => question,
            Err(err) => {
                warn!("quiz question request failed, using fallback: {err}");
                QuizQuestion::fallback()
            }
        }
    }

    pub async fn evaluate_check(&self, check: &AnswerCheck) -> String {
        match self.source.evaluate(check).await {
            Ok(feedback) => feedback,
            Err(err) => {
                warn!("quiz feedback request failed, using fallback: {err}");
                FALLBACK_FEEDBACK.to_string()
            }
        }
    }

    pub async fn evaluate(
        &self,
        submitted_hour: u8,
        submitted_minute: u8,
        target_hour: u8,
        target_minute: u8,
    ) -> String {
        let check =
            AnswerCheck::from_fields(submitted_hour, submitted_minute, target_hour, target_minute);
        self.evaluate_check(&check).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

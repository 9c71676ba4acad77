use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{ClockTime, MINUTES_PER_DAY, MINUTES_PER_HOUR};

/// Submitted answers within this many minutes of the target are accepted.
pub const ANSWER_TOLERANCE_MINUTES: i64 = 2;

pub const FALLBACK_QUESTION_TEXT: &str = "Can you show me 12 o'clock?";
pub const FALLBACK_QUESTION_HINT: &str = "Both hands point up!";
pub const FALLBACK_FEEDBACK: &str = "Nice try!";

/// One quiz round, as produced by the question source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question_text: String,
    pub target_hour: u8,
    pub target_minute: u8,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizQuestionError {
    #[error("target hour {0} is outside 0..=23")]
    HourOutOfRange(u8),
    #[error("target minute {0} is outside 0..=59")]
    MinuteOutOfRange(u8),
    #[error("question text is empty")]
    EmptyText,
}

impl QuizQuestion {
    /// Noon, both hands up. Used whenever the source cannot produce a question.
    pub fn fallback() -> Self {
        Self {
            question_text: FALLBACK_QUESTION_TEXT.to_string(),
            target_hour: 12,
            target_minute: 0,
            hint: FALLBACK_QUESTION_HINT.to_string(),
        }
    }

    pub fn validate(self) -> Result<Self, QuizQuestionError> {
        if self.target_hour > 23 {
            return Err(QuizQuestionError::HourOutOfRange(self.target_hour));
        }
        if self.target_minute > 59 {
            return Err(QuizQuestionError::MinuteOutOfRange(self.target_minute));
        }
        if self.question_text.trim().is_empty() {
            return Err(QuizQuestionError::EmptyText);
        }
        Ok(self)
    }

    pub fn target(&self) -> ClockTime {
        ClockTime::from_hm(i64::from(self.target_hour), i64::from(self.target_minute))
    }
}

pub fn minutes_since_midnight(hour: u8, minute: u8) -> i64 {
    i64::from(hour) * MINUTES_PER_HOUR + i64::from(minute)
}

/// Distance between two times going whichever way round the day is shorter.
pub fn wrapped_difference(a: ClockTime, b: ClockTime) -> i64 {
    let diff = (a.minutes() - b.minutes()).abs();
    diff.min(MINUTES_PER_DAY - diff)
}

/// Result of comparing the clock against a question's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerCheck {
    pub submitted: ClockTime,
    pub target: ClockTime,
    pub difference_minutes: i64,
    pub correct: bool,
}

impl AnswerCheck {
    pub fn new(submitted: ClockTime, target: ClockTime) -> Self {
        let difference_minutes = wrapped_difference(submitted, target);
        Self {
            submitted,
            target,
            difference_minutes,
            correct: difference_minutes <= ANSWER_TOLERANCE_MINUTES,
        }
    }

    pub fn from_fields(
        submitted_hour: u8,
        submitted_minute: u8,
        target_hour: u8,
        target_minute: u8,
    ) -> Self {
        Self::new(
            ClockTime::from_minutes(minutes_since_midnight(submitted_hour, submitted_minute)),
            ClockTime::from_minutes(minutes_since_midnight(target_hour, target_minute)),
        )
    }
}

pub fn is_answer_correct(submitted: ClockTime, target: ClockTime) -> bool {
    AnswerCheck::new(submitted, target).correct
}

#[cfg(test)]
#[path = "tests/quiz_tests.rs"]
mod tests;

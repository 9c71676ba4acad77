//! Backend-to-UI events and error modeling for the desktop GUI.

use clock_core::QuizQuestion;

#[derive(Debug, Clone)]
pub enum UiEvent {
    QuestionReady(QuizQuestion),
    FeedbackReady(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Configuration,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Quiz,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("api key")
            || message_lower.contains("configuration")
            || message_lower.contains("base url")
        {
            UiErrorCategory::Configuration
        } else if message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
            || message_lower.contains("runtime")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status-line text. Kept gentle; the audience is a child.
    pub fn status_text(&self) -> String {
        match (self.context, self.category) {
            (UiErrorContext::BackendStartup, _) => {
                "The quiz helper could not start. The clock still works!".to_string()
            }
            (UiErrorContext::Quiz, UiErrorCategory::Configuration) => {
                "Quiz questions are coming from the built-in list.".to_string()
            }
            (UiErrorContext::Quiz, _) => "The quiz helper is taking a break.".to_string(),
        }
    }
}

//! Backend commands queued from UI to backend worker.

use clock_core::AnswerCheck;

#[derive(Debug, Clone)]
pub enum BackendCommand {
    RequestQuestion,
    Evaluate { check: AnswerCheck },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestQuestion => "request_question",
            Self::Evaluate { .. } => "evaluate",
        }
    }
}

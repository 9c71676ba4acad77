use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("quiz service unavailable: {0}")]
    Unavailable(String),
    #[error("quiz service transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("quiz service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed quiz service response: {0}")]
    MalformedResponse(String),
    #[error("invalid quiz client configuration: {0}")]
    InvalidConfig(String),
}

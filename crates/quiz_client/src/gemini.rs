use async_trait::async_trait;
use clock_core::{AnswerCheck, QuizQuestion};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::{error::QuizError, prompts, QuizSource};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        Some(text)
    }
}

/// Quiz source backed by a hosted generative model over HTTP.
pub struct GeminiQuizSource {
    http: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl GeminiQuizSource {
    pub fn new(config: GeminiConfig) -> Result<Self, QuizError> {
        if config.api_key.trim().is_empty() {
            return Err(QuizError::InvalidConfig("API key is empty".to_string()));
        }
        if config.model.trim().is_empty() {
            return Err(QuizError::InvalidConfig("model name is empty".to_string()));
        }
        let base = Url::parse(config.base_url.trim()).map_err(|err| {
            QuizError::InvalidConfig(format!("base url '{}': {err}", config.base_url))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(QuizError::InvalidConfig(format!(
                "base url '{base}' must use http or https"
            )));
        }
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base.as_str().trim_end_matches('/'),
            config.model.trim()
        );
        Ok(Self {
            http: Client::new(),
            api_key: config.api_key,
            endpoint,
            model: config.model,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn generate(
        &self,
        prompt: String,
        generation_config: Option<GenerationConfig>,
    ) -> Result<String, QuizError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuizError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| QuizError::MalformedResponse(format!("response body: {err}")))?;
        body.into_text()
            .ok_or_else(|| QuizError::MalformedResponse("response had no candidates".to_string()))
    }
}

/// Strips a surrounding Markdown code fence, with or without a language tag.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    let inner = match inner.find('\n') {
        Some(newline) if !inner[..newline].trim_start().starts_with('{') => &inner[newline + 1..],
        _ => inner,
    };
    inner.trim()
}

pub fn parse_question(text: &str) -> Result<QuizQuestion, QuizError> {
    let question: QuizQuestion = serde_json::from_str(strip_code_fence(text))
        .map_err(|err| QuizError::MalformedResponse(format!("question json: {err}")))?;
    question
        .validate()
        .map_err(|err| QuizError::MalformedResponse(err.to_string()))
}

#[async_trait]
impl QuizSource for GeminiQuizSource {
    async fn request_question(&self) -> Result<QuizQuestion, QuizError> {
        info!(model = %self.model, "requesting quiz question");
        let text = self
            .generate(
                prompts::question_prompt(),
                Some(GenerationConfig {
                    response_mime_type: "application/json",
                    response_schema: prompts::question_schema(),
                }),
            )
            .await?;
        debug!(response = %text, "quiz question response");
        parse_question(&text)
    }

    async fn evaluate(&self, check: &AnswerCheck) -> Result<String, QuizError> {
        info!(
            model = %self.model,
            difference_minutes = check.difference_minutes,
            "requesting answer feedback"
        );
        let text = self
            .generate(prompts::evaluation_prompt(check), None)
            .await?;
        let feedback = text.trim();
        if feedback.is_empty() {
            return Err(QuizError::MalformedResponse(
                "feedback text is empty".to_string(),
            ));
        }
        Ok(feedback.to_string())
    }
}

#[cfg(test)]
#[path = "tests/gemini_tests.rs"]
mod tests;

use std::error::Error;
use std::fmt;

use serde::Deserialize;
use serde_json::json;
use tokio::time::{timeout, Duration};

/// Client for the Gemini `generateContent` endpoint. One request per call,
/// no retries; the whole exchange is bounded by `timeout_ms`.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout_ms: u64,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        if self.api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let endpoint = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {"text": prompt}
                    ]
                }
            ]
        });

        // One deadline across send and body read: a prompt header followed
        // by a trickling body must still expire.
        let exchange = async {
            let response = self
                .http
                .post(&endpoint)
                .query(&[("key", self.api_key.as_str())])
                .json(&body)
                .send()
                .await
                .map_err(GeminiError::Request)?;
            let status = response.status();
            let payload = response.text().await.map_err(GeminiError::Request)?;
            Ok::<_, GeminiError>((status, payload))
        };

        let (status, payload) = timeout(Duration::from_millis(self.timeout_ms), exchange)
            .await
            .map_err(|_| GeminiError::Timeout)??;

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: extract_api_error(&payload),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&payload).map_err(GeminiError::MalformedResponse)?;
        candidate_text(&parsed).ok_or(GeminiError::NoCandidates)
    }
}

fn candidate_text(response: &GenerateContentResponse) -> Option<String> {
    let text = response
        .candidates
        .first()?
        .content
        .parts
        .iter()
        .find_map(|part| part.text.as_deref())?
        .trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Pull the message out of the Gemini error envelope; fall back to the raw
/// body when it is not the documented shape.
fn extract_api_error(body: &str) -> String {
    #[derive(Debug, Deserialize)]
    struct ErrorEnvelope {
        error: Option<ApiError>,
    }
    #[derive(Debug, Deserialize)]
    struct ApiError {
        message: Option<String>,
        status: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(err) = parsed.error {
            let message = err.message.unwrap_or_else(|| "unknown error".to_string());
            let status = err.status.unwrap_or_else(|| "unknown".to_string());
            return format!("{message} (status={status})");
        }
    }
    body.trim().to_string()
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug)]
pub enum GeminiError {
    MissingApiKey,
    Timeout,
    Request(reqwest::Error),
    Api { status: u16, message: String },
    MalformedResponse(serde_json::Error),
    NoCandidates,
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => {
                write!(f, "Gemini integration missing: set GEMINI_API_KEY")
            }
            Self::Timeout => write!(f, "Gemini request timed out"),
            Self::Request(err) => write!(f, "failed to reach Gemini: {err}"),
            Self::Api { status, message } => {
                write!(f, "Gemini API error ({status}): {message}")
            }
            Self::MalformedResponse(err) => {
                write!(f, "failed to parse Gemini response JSON: {err}")
            }
            Self::NoCandidates => write!(f, "Gemini response did not contain an answer"),
        }
    }
}

impl Error for GeminiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::MalformedResponse(err) => Some(err),
            _ => None,
        }
    }
}

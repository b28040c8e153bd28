use crate::config::AppConfig;
use crate::diagnostics::log_warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

static GEMINI_HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub const SECURITY_AUDIT_PROMPT: &str = "Generate a short, technical but friendly message (max 2 sentences) confirming this music session is secure, encrypted, and certified by Gemini and Google technology. Use security emojis. English language.";

pub const AUDIT_EMPTY_FALLBACK: &str = "Session verified. Gemini & Google Certificate Active. 🔒✨";
pub const AUDIT_ERROR_FALLBACK: &str = "Protected Session. Gemini Protocol Active. 🛡️";
pub const VIBE_EMPTY_FALLBACK: &str = "A mysterious melody echoing through digital time.";
pub const VIBE_ERROR_FALLBACK: &str = "Analysis unavailable at the moment.";

pub fn vibe_prompt(track_name: &str) -> String {
    format!(
        "Analyze the imaginary \"vibe\" of a music track named \"{}\". Give a short, poetic, and abstract description of the feeling it evokes. (Max 30 words). English language.",
        track_name.trim()
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextGenError {
    MissingApiKey,
    Http(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for TextGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "no Gemini API key configured"),
            Self::Http(reason) => write!(f, "request failed: {reason}"),
            Self::Status(code) => write!(f, "unexpected status {code}"),
            Self::Decode(reason) => write!(f, "could not decode reply: {reason}"),
        }
    }
}

impl std::error::Error for TextGenError {}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_prompt(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined; empty when the model said nothing.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

/// Thin client for the `generateContent` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs as u64),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, TextGenError> {
        let api_key = self.api_key.as_deref().ok_or(TextGenError::MissingApiKey)?;

        let request = GEMINI_HTTP_CLIENT
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from_prompt(prompt));
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);

        let response = request
            .send()
            .await
            .map_err(|error| TextGenError::Http(error.to_string()))?;

        if !response.status().is_success() {
            return Err(TextGenError::Status(response.status().as_u16()));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|error| TextGenError::Decode(error.to_string()))?;
        Ok(body.text())
    }
}

fn reply_or_fallback(
    scope_label: &str,
    result: Result<String, TextGenError>,
    empty_fallback: &str,
    error_fallback: &str,
) -> String {
    match result {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => empty_fallback.to_string(),
        Err(err) => {
            log_warn("gemini", format!("{scope_label}: {err}"));
            error_fallback.to_string()
        }
    }
}

/// Cosmetic "session verified" line for the security badge. Never fails.
pub async fn generate_security_audit(client: &GeminiClient) -> String {
    let result = client.generate(SECURITY_AUDIT_PROMPT).await;
    reply_or_fallback(
        "security audit",
        result,
        AUDIT_EMPTY_FALLBACK,
        AUDIT_ERROR_FALLBACK,
    )
}

/// Short poetic description of a track. Never fails.
pub async fn analyze_vibe(client: &GeminiClient, track_name: &str) -> String {
    let result = client.generate(&vibe_prompt(track_name)).await;
    reply_or_fallback("vibe analysis", result, VIBE_EMPTY_FALLBACK, VIBE_ERROR_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn request_body_matches_the_rest_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hi")).unwrap();
        assert_eq!(body, serde_json::json!({ "contents": [{ "parts": [{ "text": "hi" }] }] }));
    }

    #[test]
    fn reply_text_joins_first_candidate_parts() {
        let body = decode(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"Neon rain "},{"text":"on glass."}],"role":"model"}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        );
        assert_eq!(body.text(), "Neon rain on glass.");
    }

    #[test]
    fn blocked_or_empty_reply_has_no_text() {
        assert_eq!(decode(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).text(), "");
        assert_eq!(decode(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).text(), "");
    }

    #[test]
    fn endpoint_uses_model_and_base() {
        let client = GeminiClient::from_config(&AppConfig::default());
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn vibe_prompt_quotes_the_title() {
        let prompt = vibe_prompt("  Suspense ");
        assert!(prompt.contains("named \"Suspense\""));
        assert!(prompt.contains("Max 30 words"));
    }

    #[test]
    fn fallbacks_cover_empty_and_failed_replies() {
        assert_eq!(
            reply_or_fallback("t", Ok("  ".to_string()), VIBE_EMPTY_FALLBACK, VIBE_ERROR_FALLBACK),
            VIBE_EMPTY_FALLBACK
        );
        assert_eq!(
            reply_or_fallback(
                "t",
                Err(TextGenError::Status(429)),
                AUDIT_EMPTY_FALLBACK,
                AUDIT_ERROR_FALLBACK
            ),
            AUDIT_ERROR_FALLBACK
        );
        assert_eq!(
            reply_or_fallback("t", Ok("Calm.".to_string()), VIBE_EMPTY_FALLBACK, VIBE_ERROR_FALLBACK),
            "Calm."
        );
    }

    #[test]
    fn missing_key_falls_back_without_network() {
        let client = GeminiClient::from_config(&AppConfig::default());
        let reply = pollster::block_on(analyze_vibe(&client, "Suspense"));
        assert_eq!(reply, VIBE_ERROR_FALLBACK);
        let reply = pollster::block_on(generate_security_audit(&client));
        assert_eq!(reply, AUDIT_ERROR_FALLBACK);
    }
}

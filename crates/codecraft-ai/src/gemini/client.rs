//! Gemini API client struct, request building, and response parsing.

use crate::{AiError, AiResponse, Message, Role, TokenUsage};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            // Connect timeout only: an unreachable network fails fast, while a
            // reachable-but-slow model keeps the caller blocked.
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        let contents: Vec<_> = messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.content }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            },
            "safetySettings": self.config.safety_settings,
        })
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let candidates = json["candidates"]
            .as_array()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| Self::no_candidates_error(&json))?;

        let first = &candidates[0];
        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut content = String::new();
        for part in &parts {
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
        }

        if content.is_empty() {
            return Err(Self::no_candidates_error(&json));
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }

    /// A reply with no usable text; safety blocks land here with a reason.
    fn no_candidates_error(json: &serde_json::Value) -> AiError {
        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return AiError::ParseError(format!("prompt blocked by safety filter: {reason}"));
        }
        if let Some(reason) = json["candidates"][0]["finishReason"].as_str() {
            if reason != "STOP" {
                return AiError::ParseError(format!("no text in response (finish: {reason})"));
            }
        }
        AiError::ParseError("no candidates in response".to_string())
    }
}

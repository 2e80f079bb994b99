//! Conversation engine for CodeCraft.
//!
//! Provides the Gemini API client behind a mockable `AiClient` trait and a
//! `ChatSession` that owns the conversational context:
//! - Single blocking request/reply exchanges (no streaming, no retries)
//! - Per-request safety settings
//! - Seeded session history that is replayed on every call
//! - Token usage reporting for log lines

pub mod gemini;
pub mod safety;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use safety::{default_safety_settings, HarmBlockThreshold, HarmCategory, SafetySetting};
pub use session::ChatSession;

/// A remote generative-text service: full message history in, one reply out.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Prompt must not be empty")]
    EmptyPrompt,
}

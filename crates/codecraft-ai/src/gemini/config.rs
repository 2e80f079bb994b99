//! Gemini API client configuration.

use crate::safety::{default_safety_settings, SafetySetting};
use crate::AiError;

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub safety_settings: Vec<SafetySetting>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("safety_settings", &self.safety_settings)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-2.0-flash".to_string(),
            max_tokens: 4096,
            temperature: 0.7,
            safety_settings: default_safety_settings(),
        }
    }

    /// Create config from the process environment.
    ///
    /// Resolution order:
    /// 1. `GOOGLE_API_KEY` env var
    /// 2. `GEMINI_API_KEY` env var (accepted by Google's own SDKs)
    pub fn from_env() -> Result<Self, AiError> {
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(Self::new(key));
            }
        }

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(Self::new(key));
            }
        }

        Err(AiError::Configuration(
            "Google API key not found. Set the GOOGLE_API_KEY environment \
             variable (a .env file in the working directory also works)."
                .into(),
        ))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_safety_settings(mut self, settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = settings;
        self
    }
}

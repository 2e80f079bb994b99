//! Google Gemini API client.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;

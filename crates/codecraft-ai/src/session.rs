//! Chat session handle.
//!
//! A [`ChatSession`] owns the conversation context sent to the model on every
//! call. The full history goes out with each request, so the remote service
//! sees every prior turn in order. `send` takes `&mut self`, which makes
//! concurrent sends on one session unrepresentable; callers get strict
//! request ordering for free.

use crate::{AiClient, AiError, Message};

/// Conversation context for a single session with the model.
#[derive(Debug, Default)]
pub struct ChatSession {
    history: Vec<Message>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session whose context starts with pre-written turns.
    ///
    /// Used to prime the model with instructions before the first real
    /// exchange, without those turns ever being shown to the user.
    pub fn with_seed_history(seed: Vec<Message>) -> Self {
        Self { history: seed }
    }

    /// Send one user turn and wait for the reply.
    ///
    /// On success the user turn and the assistant reply are both appended to
    /// the session history. On failure the history is restored to its state
    /// before the call, so a retry re-sends a clean context.
    pub async fn send(&mut self, client: &dyn AiClient, text: &str) -> Result<String, AiError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AiError::EmptyPrompt);
        }

        self.history.push(Message::user(text));

        match client.send_message(&self.history).await {
            Ok(response) => {
                self.history.push(Message::assistant(&response.content));
                Ok(response.content)
            }
            Err(e) => {
                self.history.pop();
                Err(e)
            }
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

//! Tutor session orchestration.
//!
//! [`TutorSession`] is the one object owning every piece of per-session
//! state: the chat context, the visible transcript, the code runner, and the
//! editor draft's lifecycle peers. It is created at startup, threaded through
//! every handler, and dropped when the session ends. Nothing session-scoped
//! lives outside it.

use codecraft_ai::{AiClient, AiError, ChatSession};
use codecraft_runner::{ExecutionResult, PythonRunner, RunnerError};
use uuid::Uuid;

use crate::transcript::{Transcript, TranscriptError, Turn};
use crate::tutor;

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error(transparent)]
    Ai(#[from] AiError),
    #[error(transparent)]
    Runner(#[from] RunnerError),
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
}

pub struct TutorSession {
    id: Uuid,
    client: Box<dyn AiClient>,
    chat: ChatSession,
    transcript: Transcript,
    runner: PythonRunner,
}

impl TutorSession {
    /// Create a session whose chat context is seeded with the tutor charter.
    /// The seed turns live only in the chat context, never in the transcript.
    pub fn new(client: Box<dyn AiClient>, runner: PythonRunner) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            chat: ChatSession::with_seed_history(tutor::seed_history()),
            transcript: Transcript::default(),
            runner,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        self.transcript.turns()
    }

    /// Ask the model for the session's opening instruction.
    ///
    /// Blocks until the model replies; the reply becomes the first transcript
    /// entry. A failure here is a failure to start the session at all.
    pub async fn start(&mut self) -> Result<(), TutorError> {
        tracing::info!(session = %self.id, "starting tutor session");
        let reply = self
            .chat
            .send(self.client.as_ref(), tutor::FIRST_INSTRUCTION)
            .await?;
        self.transcript.push_assistant(reply);
        Ok(())
    }

    /// Free-text input: one user turn, then the tutor's reply.
    ///
    /// On a failed send the user turn stays in the transcript and no
    /// assistant turn is appended; resubmitting retries with a clean chat
    /// context because the chat handle rolls its own history back.
    pub async fn handle_chat(&mut self, text: &str) -> Result<(), TutorError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AiError::EmptyPrompt.into());
        }
        self.transcript.push_user(text);
        let reply = self.chat.send(self.client.as_ref(), text).await?;
        self.transcript.push_assistant(reply);
        Ok(())
    }

    /// Phase one of a code submission: record the code and run it.
    ///
    /// The result is folded into the submission turn just pushed and also
    /// returned to the caller for the transient readout under the editor.
    pub async fn run_code(&mut self, code: &str) -> Result<ExecutionResult, TutorError> {
        self.transcript
            .push_user(tutor::format_code_submission(code));
        let result = self.runner.run(code).await?;
        self.transcript
            .merge_result_into_last_user(&tutor::format_result_addendum(&result.display_text()))?;
        Ok(result)
    }

    /// Phase two of a code submission: the tutor reacts to the result.
    pub async fn evaluate(&mut self, result: &ExecutionResult) -> Result<(), TutorError> {
        let prompt =
            tutor::evaluation_prompt(&result.display_text(), result.error_detail.as_deref());
        let reply = self.chat.send(self.client.as_ref(), &prompt).await?;
        self.transcript.push_assistant(reply);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use codecraft_ai::{AiResponse, Message, Role, TokenUsage};
    use std::sync::{Arc, Mutex};

    /// Records the last prompt of every request it receives.
    struct MockClient {
        reply: Option<String>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl AiClient for MockClient {
        async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
            let last = messages.last().map(|m| m.content.clone()).unwrap_or_default();
            self.seen.lock().unwrap().push(last);
            match &self.reply {
                Some(text) => Ok(AiResponse {
                    content: text.clone(),
                    usage: TokenUsage::default(),
                }),
                None => Err(AiError::ApiError("HTTP 500: boom".into())),
            }
        }
    }

    fn session_replying(text: &str) -> (TutorSession, Arc<Mutex<Vec<String>>>) {
        session_with(Some(text.to_string()))
    }

    fn session_failing() -> (TutorSession, Arc<Mutex<Vec<String>>>) {
        session_with(None)
    }

    fn session_with(reply: Option<String>) -> (TutorSession, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let client = MockClient {
            reply,
            seen: Arc::clone(&seen),
        };
        let session = TutorSession::new(
            Box::new(client),
            PythonRunner::with_interpreter("python3"),
        );
        (session, seen)
    }

    async fn python_available() -> bool {
        tokio::process::Command::new("python3")
            .arg("--version")
            .output()
            .await
            .is_ok()
    }

    #[tokio::test]
    async fn start_shows_only_the_first_reply() {
        let (mut session, _) = session_replying("Let's learn print()!");
        session.start().await.unwrap();
        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.turns()[0].role, Role::Assistant);
        assert_eq!(session.turns()[0].content, "Let's learn print()!");
    }

    #[tokio::test]
    async fn successful_chat_adds_two_turns() {
        let (mut session, _) = session_replying("Good question!");
        session.handle_chat("what is a string?").await.unwrap();
        assert_eq!(session.turns().len(), 2);
        assert_eq!(session.turns()[0].role, Role::User);
        assert_eq!(session.turns()[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn failed_chat_adds_only_the_user_turn() {
        let (mut session, _) = session_failing();
        let err = session.handle_chat("what is a string?").await.unwrap_err();
        assert!(matches!(err, TutorError::Ai(_)));
        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.turns()[0].role, Role::User);
    }

    #[tokio::test]
    async fn blank_chat_input_is_rejected_without_a_turn() {
        let (mut session, _) = session_replying("unused");
        let err = session.handle_chat("   ").await.unwrap_err();
        assert!(matches!(err, TutorError::Ai(AiError::EmptyPrompt)));
        assert!(session.turns().is_empty());
    }

    #[tokio::test]
    async fn code_submission_merges_its_result_into_the_code_turn() {
        if !python_available().await {
            return;
        }
        let (mut session, _) = session_replying("Nice!");
        let result = session.run_code("print(\"hi\")").await.unwrap();
        assert!(result.succeeded);

        assert_eq!(session.turns().len(), 1);
        let turn = &session.turns()[0];
        assert_eq!(turn.role, Role::User);
        assert!(turn.content.starts_with("```python\nprint(\"hi\")\n```"));
        assert!(turn.content.contains("**Result:**"));
        assert!(turn.content.contains("hi"));
    }

    #[tokio::test]
    async fn evaluation_sends_the_result_and_appends_the_reply() {
        if !python_available().await {
            return;
        }
        let (mut session, seen) = session_replying("Exactly! Next up...");
        let result = session.run_code("print(40 + 2)").await.unwrap();
        session.evaluate(&result).await.unwrap();

        assert_eq!(session.turns().len(), 2);
        assert_eq!(session.turns()[1].role, Role::Assistant);

        let prompts = seen.lock().unwrap();
        let prompt = prompts.last().unwrap();
        assert!(prompt.contains("The user ran the code"));
        assert!(prompt.contains("42"));
    }

    #[tokio::test]
    async fn failed_evaluation_keeps_the_merged_code_turn() {
        if !python_available().await {
            return;
        }
        let (mut session, _) = session_failing();
        let result = session.run_code("print(1)").await.unwrap();
        let err = session.evaluate(&result).await.unwrap_err();
        assert!(matches!(err, TutorError::Ai(_)));
        assert_eq!(session.turns().len(), 1);
        assert!(session.turns()[0].content.contains("**Result:**"));
    }
}

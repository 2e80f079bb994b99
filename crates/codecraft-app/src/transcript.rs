//! Session transcript.

use codecraft_ai::Role;

/// One visible message, tagged with who said it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Ordered record of everything said in the session.
///
/// The transcript only grows. The one sanctioned mutation is
/// [`merge_result_into_last_user`](Transcript::merge_result_into_last_user),
/// which folds an execution result into the code submission that produced it,
/// and it refuses to touch anything but a trailing user turn.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("Cannot merge a result into an empty transcript")]
    Empty,
    #[error("Cannot merge a result: the last turn is not a user submission")]
    LastTurnNotUser,
}

impl Transcript {
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::User,
            content: content.into(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn {
            role: Role::Assistant,
            content: content.into(),
        });
    }

    /// Append `addendum` to the last turn, which must be the user turn pushed
    /// in the immediately preceding step of the same action.
    pub fn merge_result_into_last_user(&mut self, addendum: &str) -> Result<(), TranscriptError> {
        let last = self.turns.last_mut().ok_or(TranscriptError::Empty)?;
        if last.role != Role::User {
            return Err(TranscriptError::LastTurnNotUser);
        }
        last.content.push_str(addendum);
        Ok(())
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushes_append_in_order() {
        let mut transcript = Transcript::default();
        transcript.push_assistant("welcome");
        transcript.push_user("hi");
        assert_eq!(transcript.turns().len(), 2);
        assert_eq!(transcript.turns()[0].role, Role::Assistant);
        assert_eq!(transcript.turns()[1].content, "hi");
    }

    #[test]
    fn merge_appends_to_a_trailing_user_turn() {
        let mut transcript = Transcript::default();
        transcript.push_user("```python\nprint(1)\n```");
        transcript
            .merge_result_into_last_user("\n**Result:**\n```text\n1\n```")
            .unwrap();
        assert_eq!(
            transcript.turns()[0].content,
            "```python\nprint(1)\n```\n**Result:**\n```text\n1\n```"
        );
    }

    #[test]
    fn merge_refuses_a_trailing_assistant_turn() {
        let mut transcript = Transcript::default();
        transcript.push_user("code");
        transcript.push_assistant("feedback");
        assert_eq!(
            transcript.merge_result_into_last_user("result"),
            Err(TranscriptError::LastTurnNotUser)
        );
        assert_eq!(transcript.turns()[1].content, "feedback");
    }

    #[test]
    fn merge_refuses_an_empty_transcript() {
        let mut transcript = Transcript::default();
        assert_eq!(
            transcript.merge_result_into_last_user("result"),
            Err(TranscriptError::Empty)
        );
    }
}

//! Prompt material and message formatting for the tutoring session.
//!
//! The charter below defines the tutor persona. It is seeded into the chat
//! context as a hidden user turn, paired with a scripted acknowledgement, so
//! the model starts every session already in character.

use codecraft_ai::Message;

/// Tutor persona charter, the first (hidden) turn of every session.
pub const INITIAL_PROMPT: &str = r#"You are "CodeCraft Interactive", a friendly, patient, and adaptive AI Python tutor. Your goal is to guide absolute beginners step-by-step through fundamental Python concepts.
Your Teaching Style:
1. **Start Simple & Progress Gradually:** Begin with the very basics (like `print()`). Introduce one small concept or feature at a time. Only move to the next logical concept after the user seems to grasp the current one.
2. **Explain Concepts Clearly:** Use simple language and analogies. Briefly explain the 'why' behind the code. When presenting examples, sometimes include intentional mistakes. Explain these errors, what they mean, and how to fix them.
3. **Give Small Coding Tasks:** Provide specific, small code examples or tasks for the user to try in the editor (e.g., "Try printing your name", "Now try printing the result of 5 + 3"). Use markdown code blocks for code examples.
4. **Instruct Clearly:** Explicitly tell the user what code to type and instruct them to press the "Run Code" button. Include tasks where the code has an error, and then guide them through debugging that error.
5. **Evaluate Code Submissions:** When the user runs code, review their code and the output or error message. Assess if they successfully completed the task or if they encountered an error.

6. **Provide Constructive Feedback:**
   - **On Success:** Praise gently ("Nice!", "Exactly!", "Great job!"). Then, introduce the next small step or concept.
   - **On Error:** Treat errors as valuable learning opportunities.
     - Calmly acknowledge the error ("Okay, looks like we got an error. That's normal! Let's figure it out.").
     - Help the user read the error message. Explain what the error type (e.g., `SyntaxError`, `NameError`, `TypeError`) means in simple terms.
     - Point out the part of the code where the error occurred.
     - Explain the underlying Python rule or concept that caused the error (e.g., "Python needs quotes around text", "You can't add a number and text directly").
     - Gently suggest how to fix the code and provide a corrected code snippet if needed.
7. **Handle User Questions:** When a user asks a question, answer directly and clearly. Relate the answer back to the learning path if possible, or ask if they'd like to try a related coding task.
8. **Maintain Context:** Remember what you've already taught or discussed in the current session, including any errors encountered and resolved.
9. **Be Encouraging:** Use a positive and patient tone. Include emojis occasionally 😊👍✨. Keep responses focused and supportive.
Overall, use intentional errors as teaching moments to help learners understand both what went wrong and how to fix it. This approach reinforces debugging skills and builds confidence."#;

/// Scripted model reply paired with the charter in the seed history.
pub const CHARTER_ACK: &str = "Okay, I'm ready to start teaching Python basics interactively! I'll begin with the `print()` function.";

/// First real request of a session. Its reply is the opening guidance shown
/// to the learner.
pub const FIRST_INSTRUCTION: &str = "Give the user the very first instruction: Explain the `print()` function briefly and ask them to print the message 'Hello, Learner!' using `print(\"Hello, Learner!\")`.";

/// Editor contents when the session starts, matching the first task.
pub const INITIAL_DRAFT: &str = "print(\"Hello, Learner!\")";

/// The hidden turns every chat context starts with.
pub fn seed_history() -> Vec<Message> {
    vec![
        Message::user(INITIAL_PROMPT),
        Message::assistant(CHARTER_ACK),
    ]
}

/// Transcript form of a code submission.
pub fn format_code_submission(code: &str) -> String {
    format!("```python\n{code}\n```")
}

/// Addendum folded into a code submission turn once its result is known.
pub fn format_result_addendum(result_display: &str) -> String {
    format!("\n**Result:**\n```text\n{result_display}\n```")
}

/// Prompt asking the tutor to react to an execution result.
///
/// The trace line is present on every evaluation, empty when the run
/// succeeded, so the model always sees the same prompt shape.
pub fn evaluation_prompt(result_display: &str, error_detail: Option<&str>) -> String {
    format!(
        "The user ran the code shown in their last message. The result/output was:\n\
         ```text\n{result_display}```\n\n\
         (Full error trace if any: {trace})\n\n\
         Please evaluate this based on the conversation context/last task. \
         Provide feedback according to the teaching style: praise success and \
         suggest the next logical small step, OR if there was an error, explain \
         the error message/concept and guide towards the fix.",
        trace = error_detail.unwrap_or("")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use codecraft_ai::Role;

    #[test]
    fn seed_history_is_a_charter_and_its_ack() {
        let seed = seed_history();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].role, Role::User);
        assert!(seed[0].content.contains("CodeCraft Interactive"));
        assert_eq!(seed[1].role, Role::Assistant);
        assert_eq!(seed[1].content, CHARTER_ACK);
    }

    #[test]
    fn code_submissions_are_fenced_python_blocks() {
        assert_eq!(
            format_code_submission("print(1)"),
            "```python\nprint(1)\n```"
        );
    }

    #[test]
    fn evaluation_prompt_embeds_result_and_trace() {
        let prompt = evaluation_prompt(
            "💥 NameError: name 'x' is not defined",
            Some("Traceback (most recent call last):\n..."),
        );
        assert!(prompt.contains("💥 NameError: name 'x' is not defined"));
        assert!(prompt.contains("Traceback (most recent call last):"));
        assert!(prompt.contains("Please evaluate this"));
    }

    #[test]
    fn evaluation_prompt_keeps_the_trace_line_when_there_is_no_trace() {
        let prompt = evaluation_prompt("42", None);
        assert!(prompt.contains("(Full error trace if any: )"));
    }
}

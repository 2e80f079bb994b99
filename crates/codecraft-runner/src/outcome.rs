//! Outcome of one code submission.

use serde::{Deserialize, Serialize};

/// What a code submission did: captured output, or a structured failure.
///
/// `error_detail` carries the full diagnostic trace for downstream tutoring
/// logic; only `error_summary` is ever shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub succeeded: bool,
    /// Trimmed stdout. On failure, whatever was printed before the error.
    pub captured_text: String,
    /// Single line in the form `ExcType: message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_summary: Option<String>,
    /// Full traceback text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl ExecutionResult {
    pub fn success(captured_text: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            captured_text: captured_text.into(),
            error_summary: None,
            error_detail: None,
        }
    }

    pub fn failure(
        captured_text: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            succeeded: false,
            captured_text: captured_text.into(),
            error_summary: Some(summary.into()),
            error_detail: Some(detail.into()),
        }
    }

    /// Human-readable result line. Never empty, even for silent successes.
    pub fn display_text(&self) -> String {
        if self.succeeded {
            if self.captured_text.is_empty() {
                "✅ Code ran successfully (No output)".to_string()
            } else {
                self.captured_text.clone()
            }
        } else {
            match &self.error_summary {
                Some(summary) => format!("💥 {summary}"),
                None => "💥 Execution failed".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_output_displays_the_output() {
        let result = ExecutionResult::success("x");
        assert!(result.succeeded);
        assert_eq!(result.display_text(), "x");
    }

    #[test]
    fn silent_success_displays_an_explicit_indicator() {
        let result = ExecutionResult::success("");
        assert_eq!(result.display_text(), "✅ Code ran successfully (No output)");
    }

    #[test]
    fn failure_displays_only_the_summary() {
        let result = ExecutionResult::failure(
            "partial output",
            "NameError: name 'x' is not defined",
            "Traceback (most recent call last):\n  ...",
        );
        assert!(!result.succeeded);
        assert_eq!(
            result.display_text(),
            "💥 NameError: name 'x' is not defined"
        );
    }
}

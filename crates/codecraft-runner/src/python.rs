//! Python subprocess runner.

use std::process::Stdio;

use tokio::process::Command;

use crate::trace::summarize_traceback;
use crate::{ExecutionResult, RunnerError};

/// Environment variable overriding the interpreter binary.
pub const PYTHON_ENV_VAR: &str = "CODECRAFT_PYTHON";

const DEFAULT_INTERPRETER: &str = "python3";

/// Runs code submissions, one fresh interpreter process per submission.
///
/// Process-per-run is the namespace guarantee: no variable, import, or
/// monkey-patch survives from one submission to the next. There is
/// deliberately no time limit and no output cap; an infinite loop blocks the
/// session until the user kills it.
#[derive(Debug, Clone)]
pub struct PythonRunner {
    interpreter: String,
}

impl PythonRunner {
    /// Interpreter from `CODECRAFT_PYTHON`, defaulting to `python3` on PATH.
    pub fn from_env() -> Self {
        let interpreter = std::env::var(PYTHON_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string());
        Self { interpreter }
    }

    pub fn with_interpreter(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Run one submission to completion and capture what it did.
    ///
    /// `-I` isolates the interpreter from the host environment (no inherited
    /// `PYTHON*` variables, no user site-packages, no cwd on `sys.path`).
    /// stdin is closed so `input()` raises `EOFError` instead of hanging.
    pub async fn run(&self, source: &str) -> Result<ExecutionResult, RunnerError> {
        tracing::info!(
            interpreter = %self.interpreter,
            bytes = source.len(),
            "running code submission"
        );

        let output = Command::new(&self.interpreter)
            .arg("-I")
            .arg("-c")
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| RunnerError::Spawn {
                interpreter: self.interpreter.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);

        if output.status.success() {
            tracing::debug!(stdout_bytes = stdout.len(), "submission succeeded");
            return Ok(ExecutionResult::success(stdout));
        }

        let summary = summarize_traceback(&stderr).unwrap_or_else(|| match output.status.code() {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        });
        tracing::debug!(%summary, "submission failed");
        Ok(ExecutionResult::failure(stdout, summary, stderr.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn python_available() -> bool {
        Command::new(DEFAULT_INTERPRETER)
            .arg("--version")
            .output()
            .await
            .is_ok()
    }

    fn runner() -> PythonRunner {
        PythonRunner::with_interpreter(DEFAULT_INTERPRETER)
    }

    #[tokio::test]
    async fn captures_stdout_of_a_successful_run() {
        if !python_available().await {
            return;
        }
        let result = runner().run("print(\"x\")").await.unwrap();
        assert!(result.succeeded);
        assert_eq!(result.captured_text, "x");
        assert_eq!(result.error_summary, None);
    }

    #[tokio::test]
    async fn silent_success_captures_empty_text() {
        if !python_available().await {
            return;
        }
        let result = runner().run("pass").await.unwrap();
        assert!(result.succeeded);
        assert_eq!(result.captured_text, "");
    }

    #[tokio::test]
    async fn raised_error_becomes_a_structured_failure() {
        if !python_available().await {
            return;
        }
        let result = runner().run("print(value)").await.unwrap();
        assert!(!result.succeeded);
        let summary = result.error_summary.unwrap();
        assert!(summary.starts_with("NameError:"), "got: {summary}");
        assert!(!result.error_detail.unwrap().is_empty());
    }

    #[tokio::test]
    async fn output_before_the_error_is_kept() {
        if !python_available().await {
            return;
        }
        let result = runner().run("print(\"before\")\nboom").await.unwrap();
        assert!(!result.succeeded);
        assert_eq!(result.captured_text, "before");
    }

    #[tokio::test]
    async fn runs_do_not_share_a_namespace() {
        if !python_available().await {
            return;
        }
        let r = runner();
        r.run("lesson_var = 41").await.unwrap();
        let second = r.run("print(lesson_var + 1)").await.unwrap();
        assert!(!second.succeeded, "state leaked across runs");
        assert!(second.error_summary.unwrap().starts_with("NameError:"));
    }

    #[tokio::test]
    async fn stdin_is_closed() {
        if !python_available().await {
            return;
        }
        let result = runner().run("input()").await.unwrap();
        assert!(!result.succeeded);
        assert!(result.error_summary.unwrap().starts_with("EOFError"));
    }

    #[tokio::test]
    async fn missing_interpreter_is_a_runner_error() {
        let err = PythonRunner::with_interpreter("codecraft-no-such-python")
            .run("print(1)")
            .await
            .unwrap_err();
        assert!(matches!(err, RunnerError::Spawn { .. }));
        assert!(err.to_string().contains("codecraft-no-such-python"));
    }
}

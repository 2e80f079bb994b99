//! Learner-code execution.
//!
//! Runs a code submission in a fresh interpreter process and captures
//! everything it wrote. A submission that raises is a normal, fully captured
//! outcome ([`ExecutionResult`] with `succeeded = false`); [`RunnerError`] is
//! reserved for faults in the execution environment itself, such as a missing
//! interpreter binary.

pub mod outcome;
pub mod python;
mod trace;

pub use outcome::ExecutionResult;
pub use python::PythonRunner;

/// Faults launching or supervising the interpreter process.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Failed to launch {interpreter}: {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },
}

//! Traceback summarization.

/// Extract the one-line summary from a Python traceback.
///
/// CPython always prints the `ExcType: message` line last, so the last
/// non-empty line of stderr is the summary. Returns `None` when stderr was
/// empty (e.g. the process died without a traceback).
pub(crate) fn summarize_traceback(stderr: &str) -> Option<String> {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

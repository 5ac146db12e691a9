use thiserror::Error;

/// A single sandbox invocation that did not produce a usable run result.
///
/// The harness treats these as a failed test case and keeps going; only
/// the caller of a bare [`crate::JudgeClient`] may decide otherwise.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("sandbox request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sandbox returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Terminal failures of an evaluation. Sandbox failures are deliberately
/// absent: the harness recovers them into per-case verdicts instead.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// Unsupported language or a problem with no test cases. Terminal,
    /// never retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The CMS could not be reached or answered with garbage.
    #[error("problem source unavailable: {0}")]
    ProblemFetch(#[source] reqwest::Error),
}

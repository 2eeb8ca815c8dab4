use dynin_report::ReplayError;
use thiserror::Error;

/// Fatal engine failures. Neither kind is retried: after either one, no
/// partial compilation output is trustworthy. The host decides whether to
/// terminate the process.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The active mode needed the long-form location of a call site that
    /// has no usable source position.
    #[error("call site {caller} -> {callee} has no usable source location")]
    MissingLocation { caller: String, callee: String },

    #[error(transparent)]
    Replay(#[from] ReplayError),
}

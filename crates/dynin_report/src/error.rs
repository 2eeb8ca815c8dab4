use std::path::PathBuf;
use thiserror::Error;

/// Fatal replay-log failures.
///
/// There is no recovery path: a malformed override file must never be
/// silently treated as "no overrides", because a partially applied table
/// would non-deterministically change which functions get inlined.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read replay log {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("replay log ended before the `locations seen:` header was found")]
    HeaderNotFound,

    #[error("malformed decision on line {line_no}: `{line}`")]
    MalformedDecision { line_no: usize, line: String },
}

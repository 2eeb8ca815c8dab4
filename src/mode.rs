//! Mode selection from the single external configuration string.

use std::path::Path;

use tracing::info;

use crate::error::AdvisorError;
use dynin_report::{OverrideTable, ReplayLog};

/// Fixed-at-startup selector for how the oracle's verdict is combined with
/// override data. Chosen once from the configuration string and immutable
/// for the run's lifetime.
#[derive(Debug)]
pub enum AdviceMode {
    /// Pass the oracle verdict through unchanged.
    Default,
    /// Never inline, regardless of the oracle.
    ForceReject,
    /// Always inline, regardless of the oracle.
    ForceAccept,
    /// Replay verdicts recorded by a prior run; fall back to the oracle for
    /// call sites the table does not mention.
    Replay(OverrideTable),
}

impl AdviceMode {
    /// `"false"` forces rejection, `"true"` forces acceptance, `"default"`
    /// or an empty string keeps the oracle's verdicts, and any other string
    /// is a path to a prior run's report, loaded eagerly here. A load
    /// failure is fatal: an unreadable or malformed report never silently
    /// degrades to `Default` or to an empty table.
    pub fn from_context(context: &str) -> Result<Self, AdvisorError> {
        match context {
            "false" => Ok(Self::ForceReject),
            "true" => Ok(Self::ForceAccept),
            "" | "default" => Ok(Self::Default),
            path => {
                let table = ReplayLog::load(Path::new(path))?.into_table();
                info!(entries = table.len(), path, "loaded inlining overrides");
                Ok(Self::Replay(table))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ForceReject => "force-reject",
            Self::ForceAccept => "force-accept",
            Self::Replay(_) => "replay",
        }
    }
}

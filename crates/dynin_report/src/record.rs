use serde::{Deserialize, Serialize};
use std::fmt;

/// Header opening the audit-trail section of a run report.
pub const LOCATIONS_HEADER: &str = "locations seen:";

/// Header opening the decision section of a run report.
pub const DECISIONS_HEADER: &str = "decisions made:";

pub const VERDICT_INLINE: &str = "inline";
pub const VERDICT_NO_INLINE: &str = "no-inline";

/// One final inlining decision, as recorded and replayed.
///
/// `location` is the long-form call-site encoding, which is the join key
/// between the run that wrote the record and the run that replays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub caller: String,
    pub callee: String,
    pub location: String,
    pub inlined: bool,
}

impl DecisionRecord {
    pub fn new(
        caller: impl Into<String>,
        callee: impl Into<String>,
        location: impl Into<String>,
        inlined: bool,
    ) -> Self {
        Self {
            caller: caller.into(),
            callee: callee.into(),
            location: location.into(),
            inlined,
        }
    }

    pub fn verdict(&self) -> &'static str {
        if self.inlined {
            VERDICT_INLINE
        } else {
            VERDICT_NO_INLINE
        }
    }
}

impl fmt::Display for DecisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} @ {} : {}",
            self.caller,
            self.callee,
            self.location,
            self.verdict()
        )
    }
}

//! Decision log recording and replay.
//!
//! The run report written by [`DecisionLog::render`] and the replay input
//! consumed by [`ReplayLog::parse`] share one line-oriented grammar. Header
//! text and the decision-line shape are the compatibility surface between
//! compiler runs and must stay byte-stable.

pub mod error;
pub mod graph;
pub mod record;
pub mod recorder;
pub mod replay;
pub mod table;

pub use error::ReplayError;
pub use record::{DECISIONS_HEADER, DecisionRecord, LOCATIONS_HEADER};
pub use recorder::DecisionLog;
pub use replay::ReplayLog;
pub use table::OverrideTable;

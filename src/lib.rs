//! dyninline: an override-and-replay engine for function-inlining decisions.
//!
//! The engine sits between a host optimizer's call-site traversal and its
//! cost-model oracle. For every call site it obtains the oracle's default
//! verdict, optionally forces or replays a different one from a prior run's
//! report, records what it decided, and serializes the run's report at
//! shutdown. The report is itself valid replay input, which is what makes a
//! run reproducible across two independent compilations.
//!
//! The cost model, the actual inlining transformation, and the traversal
//! order all belong to the host; this crate only decides and records.

pub mod advisor;
pub mod error;
pub mod mode;
pub mod oracle;
pub mod site;

pub use advisor::{AdvisorConfig, ReplayAdvisor};
pub use error::AdvisorError;
pub use mode::AdviceMode;
pub use oracle::{Oracle, OracleAdapter, OracleVerdict};
pub use site::CallSite;

pub use dynin_loc::{LocationChain, SourceLocation};
pub use dynin_report::{DecisionLog, DecisionRecord, OverrideTable, ReplayLog};

use crate::record::{DECISIONS_HEADER, DecisionRecord, LOCATIONS_HEADER};

/// In-memory accumulator for one run's report.
///
/// Both sequences are append-only and keep processing order. The location
/// list is an audit trail, so duplicates are retained rather than deduped.
/// Owned by the run value that drives evaluation; there is no global state.
#[derive(Debug, Default)]
pub struct DecisionLog {
    locations: Vec<String>,
    decisions: Vec<DecisionRecord>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a short-form location to the audit trail.
    pub fn record_location(&mut self, location: impl Into<String>) {
        self.locations.push(location.into());
    }

    /// Append a final decision.
    pub fn record_decision(&mut self, record: DecisionRecord) {
        self.decisions.push(record);
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn decisions(&self) -> &[DecisionRecord] {
        &self.decisions
    }

    /// Serialize the report: audit header, audit lines, decision header,
    /// decision lines, each in original order. The output is also valid
    /// replay input.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(LOCATIONS_HEADER);
        out.push('\n');
        for location in &self.locations {
            out.push_str(location);
            out.push('\n');
        }
        out.push_str(DECISIONS_HEADER);
        out.push('\n');
        for decision in &self.decisions {
            out.push_str(&decision.to_string());
            out.push('\n');
        }
        out
    }
}

//! Graphviz rendering of the caller/callee pairs in a decision log.

use crate::record::DecisionRecord;

/// Render the records as a `digraph`, one edge per record, with the
/// call-site location as the edge label.
pub fn to_dot(records: &[DecisionRecord]) -> String {
    let mut out = String::from("digraph {\n");
    for record in records {
        out.push_str(&format!(
            "  {} -> {} [label=\"{}\"]\n",
            record.caller, record.callee, record.location
        ));
    }
    out.push_str("}\n");
    out
}

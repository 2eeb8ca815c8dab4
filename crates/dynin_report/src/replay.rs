//! Line-oriented parser reconstructing an override table from a prior run's
//! report.
//!
//! Three states: seek the locations header, discard the audit trail, then
//! parse decision lines. Lines before the locations header are tolerated and
//! skipped (one historical format revision required the header on the first
//! line; this parser deliberately does not). The first malformed decision
//! line fails the whole load; nothing parsed before it is observable to the
//! caller.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ReplayError;
use crate::record::{DECISIONS_HEADER, DecisionRecord, LOCATIONS_HEADER, VERDICT_INLINE};
use crate::table::OverrideTable;

enum ParseState {
    SeekLocationsHeader,
    LocationsSection,
    DecisionsSection,
}

/// A fully parsed replay log: the ordered decision records of a prior run.
#[derive(Debug, Clone)]
pub struct ReplayLog {
    records: Vec<DecisionRecord>,
}

impl ReplayLog {
    /// Parse report text. Fails if the locations header never appears or if
    /// any decision line does not match the record grammar.
    pub fn parse(text: &str) -> Result<Self, ReplayError> {
        let mut state = ParseState::SeekLocationsHeader;
        let mut records = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            match state {
                ParseState::SeekLocationsHeader => {
                    if line == LOCATIONS_HEADER {
                        state = ParseState::LocationsSection;
                    }
                }
                ParseState::LocationsSection => {
                    // Audit-trail lines carry no replay data.
                    if line == DECISIONS_HEADER {
                        state = ParseState::DecisionsSection;
                    }
                }
                ParseState::DecisionsSection => {
                    records.push(parse_decision_line(line, idx + 1)?);
                }
            }
        }

        if matches!(state, ParseState::SeekLocationsHeader) {
            return Err(ReplayError::HeaderNotFound);
        }

        Ok(Self { records })
    }

    /// Read and parse a report file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let log = Self::parse(&text)?;
        debug!(records = log.records.len(), path = %path.display(), "parsed replay log");
        Ok(log)
    }

    pub fn records(&self) -> &[DecisionRecord] {
        &self.records
    }

    /// Collapse the record list into the override table, later records
    /// overwriting earlier ones for the same location.
    pub fn into_table(self) -> OverrideTable {
        let mut table = OverrideTable::new();
        for record in self.records {
            table.insert(record.location, record.inlined);
        }
        table
    }
}

fn parse_decision_line(line: &str, line_no: usize) -> Result<DecisionRecord, ReplayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [caller, "->", callee, "@", location, ":", verdict] => Ok(DecisionRecord::new(
            *caller,
            *callee,
            *location,
            *verdict == VERDICT_INLINE,
        )),
        _ => Err(ReplayError::MalformedDecision {
            line_no,
            line: line.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const WELL_FORMED: &str = "locations seen:\n\
                               file.c:10\n\
                               decisions made:\n\
                               bar -> baz @ file.c:10 : inline\n";

    #[test]
    fn test_parse_well_formed_log() {
        let log = ReplayLog::parse(WELL_FORMED).unwrap();
        assert_eq!(
            log.records(),
            [DecisionRecord::new("bar", "baz", "file.c:10", true)]
        );

        let table = log.into_table();
        assert_eq!(table.lookup("file.c:10"), Some(true));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_lines_before_locations_header_are_skipped() {
        let text = format!("compiler banner\nsome stray output\n{WELL_FORMED}");
        let table = ReplayLog::parse(&text).unwrap().into_table();
        assert_eq!(table.lookup("file.c:10"), Some(true));
    }

    #[test]
    fn test_missing_locations_header_is_fatal() {
        let err = ReplayLog::parse("decisions made:\nbar -> baz @ file.c:10 : inline\n")
            .unwrap_err();
        assert!(matches!(err, ReplayError::HeaderNotFound));
    }

    #[test]
    fn test_empty_input_is_fatal() {
        assert!(matches!(
            ReplayLog::parse("").unwrap_err(),
            ReplayError::HeaderNotFound
        ));
    }

    #[test]
    fn test_truncated_decision_line_is_fatal() {
        let text = "locations seen:\n\
                    file.c:10\n\
                    decisions made:\n\
                    bar -> baz @ file.c:10\n";
        let err = ReplayLog::parse(text).unwrap_err();
        match err {
            ReplayError::MalformedDecision { line_no, line } => {
                assert_eq!(line_no, 4);
                assert_eq!(line, "bar -> baz @ file.c:10");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_line_after_valid_ones_fails_whole_load() {
        let text = "locations seen:\n\
                    decisions made:\n\
                    a -> b @ f.c:1 : inline\n\
                    broken line\n\
                    c -> d @ f.c:2 : inline\n";
        assert!(matches!(
            ReplayLog::parse(text).unwrap_err(),
            ReplayError::MalformedDecision { line_no: 4, .. }
        ));
    }

    #[test]
    fn test_wrong_separator_tokens_are_fatal() {
        let text = "locations seen:\n\
                    decisions made:\n\
                    a => b @ f.c:1 : inline\n";
        assert!(matches!(
            ReplayLog::parse(text).unwrap_err(),
            ReplayError::MalformedDecision { line_no: 3, .. }
        ));
    }

    #[test]
    fn test_unknown_verdict_token_means_no_inline() {
        let text = "locations seen:\n\
                    decisions made:\n\
                    a -> b @ f.c:1 : maybe\n";
        let table = ReplayLog::parse(text).unwrap().into_table();
        assert_eq!(table.lookup("f.c:1"), Some(false));
    }

    #[test]
    fn test_last_entry_wins_for_duplicate_locations() {
        let text = "locations seen:\n\
                    decisions made:\n\
                    a -> b @ f.c:1 : inline\n\
                    a -> b @ f.c:1 : no-inline\n";
        let table = ReplayLog::parse(text).unwrap().into_table();
        assert_eq!(table.lookup("f.c:1"), Some(false));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "locations seen:\n\
                    f.c:1\n\
                    f.c:2:5\n\
                    decisions made:\n\
                    a -> b @ f.c:1 : inline\n\
                    b -> c @ f.c:2:5@[f.c:9] : no-inline\n";
        let first = ReplayLog::parse(text).unwrap().into_table();
        let second = ReplayLog::parse(text).unwrap().into_table();

        assert_eq!(first.len(), second.len());
        for (location, inlined) in first.iter() {
            assert_eq!(second.lookup(location), Some(inlined));
        }
    }

    #[test]
    fn test_nested_location_is_a_single_token() {
        let text = "locations seen:\n\
                    decisions made:\n\
                    foo -> bar @ file.c:10@[file.c:20] : inline\n";
        let table = ReplayLog::parse(text).unwrap().into_table();
        assert_eq!(table.lookup("file.c:10@[file.c:20]"), Some(true));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WELL_FORMED.as_bytes()).unwrap();

        let table = ReplayLog::load(file.path()).unwrap().into_table();
        assert_eq!(table.lookup("file.c:10"), Some(true));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = ReplayLog::load("/nonexistent/advice.log").unwrap_err();
        assert!(matches!(err, ReplayError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/advice.log"));
    }
}

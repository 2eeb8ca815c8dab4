use ahash::AHashMap;

/// Mapping from long-form call-site location to a forced verdict.
///
/// Built exactly once, from a replayed log, then read-only for the rest of
/// the run. Lookups hit the map with the long-form string as the key, which
/// is why that encoding has to be injective over physically distinct call
/// sites.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: AHashMap<String, bool>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an override, replacing any prior entry for the same location
    /// (last write wins).
    pub fn insert(&mut self, location: impl Into<String>, inlined: bool) {
        self.entries.insert(location.into(), inlined);
    }

    pub fn lookup(&self, location: &str) -> Option<bool> {
        self.entries.get(location).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit_and_miss() {
        let mut table = OverrideTable::new();
        table.insert("file.c:10", true);
        assert_eq!(table.lookup("file.c:10"), Some(true));
        assert_eq!(table.lookup("file.c:11"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut table = OverrideTable::new();
        table.insert("file.c:10", true);
        table.insert("file.c:10", false);
        assert_eq!(table.lookup("file.c:10"), Some(false));
        assert_eq!(table.len(), 1);
    }
}

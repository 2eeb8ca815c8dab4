use dynin_loc::LocationChain;

/// One call site as presented by the host traversal.
///
/// Created once per evaluated call and lives only for that evaluation. The
/// location is absent when the surrounding code carries no usable debug
/// position metadata.
#[derive(Debug, Clone)]
pub struct CallSite {
    pub caller: String,
    pub callee: String,
    pub location: Option<LocationChain>,
}

impl CallSite {
    pub fn new(
        caller: impl Into<String>,
        callee: impl Into<String>,
        location: Option<LocationChain>,
    ) -> Self {
        Self {
            caller: caller.into(),
            callee: callee.into(),
            location,
        }
    }
}

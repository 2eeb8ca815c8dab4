//! Adapter around the pluggable default-verdict source.
//!
//! The host's cost-model oracle hands out one verdict per call site, and
//! that verdict carries bookkeeping the host acts on (a mandatory-inline
//! outcome already spent, a remark already emitted). The engine may only
//! substitute its own verdict after explicitly abandoning the oracle's; the
//! adapter counts live verdicts and fails loudly if that ordering is broken.

use crate::site::CallSite;

/// A default inlining verdict produced by the oracle.
///
/// Deliberately neither `Clone` nor `Copy`, with the recommendation only
/// extractable through the adapter: every verdict must end its life in
/// exactly one `accept` or `abandon` call.
#[derive(Debug)]
pub struct OracleVerdict {
    recommended: bool,
}

impl OracleVerdict {
    pub fn new(recommended: bool) -> Self {
        Self { recommended }
    }

    pub fn is_inlining_recommended(&self) -> bool {
        self.recommended
    }
}

/// The pluggable default-verdict source. The production implementation wraps
/// the host's cost model; tests use a deterministic stub.
pub trait Oracle {
    /// Produce the default verdict for one call site. Invoked exactly once
    /// per site.
    fn evaluate(&mut self, site: &CallSite) -> OracleVerdict;

    /// Notification that a verdict will not be acted on because the engine
    /// substitutes its own.
    fn abandon(&mut self, verdict: OracleVerdict);
}

/// Wraps an [`Oracle`] and enforces the abandon-before-replace discipline.
#[derive(Debug)]
pub struct OracleAdapter<O> {
    oracle: O,
    outstanding: usize,
}

impl<O: Oracle> OracleAdapter<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            outstanding: 0,
        }
    }

    pub fn evaluate(&mut self, site: &CallSite) -> OracleVerdict {
        self.outstanding += 1;
        self.oracle.evaluate(site)
    }

    /// Pass the oracle's verdict through unchanged as the final one.
    pub fn accept(&mut self, verdict: OracleVerdict) -> bool {
        self.outstanding -= 1;
        verdict.is_inlining_recommended()
    }

    /// Give the verdict back to the oracle before a substitution.
    pub fn abandon(&mut self, verdict: OracleVerdict) {
        self.outstanding -= 1;
        self.oracle.abandon(verdict);
    }

    /// Mint a forced final verdict. Every override path must have abandoned
    /// the oracle's verdict first.
    pub fn substitute(&mut self, recommended: bool) -> bool {
        assert_eq!(
            self.outstanding, 0,
            "substituted a verdict without abandoning the oracle's first"
        );
        recommended
    }
}

//! The per-run engine: one mode, one oracle, one decision log.

use tracing::debug;

use crate::error::AdvisorError;
use crate::mode::AdviceMode;
use crate::oracle::{Oracle, OracleAdapter};
use crate::site::CallSite;
use dynin_loc::LocationChain;
use dynin_report::{DecisionLog, DecisionRecord};

/// Engine knobs fixed for the run.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Record every decision (and the location audit trail) for the final
    /// report. Off, the engine still forces or replays verdicts but
    /// `finalize` produces an empty report; this also makes a missing
    /// source location non-fatal outside replay mode.
    pub log_decisions: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            log_decisions: true,
        }
    }
}

/// Decision engine for one compilation run.
///
/// Owns every mutable accumulator of the run, so the host passes it into
/// each evaluation and flushes it explicitly with [`finalize`]; there is no
/// hidden process-wide state. Single-threaded by design: call sites are
/// evaluated one at a time in the order the host traversal presents them.
///
/// [`finalize`]: ReplayAdvisor::finalize
#[derive(Debug)]
pub struct ReplayAdvisor<O> {
    oracle: OracleAdapter<O>,
    mode: AdviceMode,
    log: DecisionLog,
    config: AdvisorConfig,
}

impl<O: Oracle> ReplayAdvisor<O> {
    /// Build the engine for one run. In replay mode the override file is
    /// read here, before any call site is evaluated; a failure is fatal and
    /// nothing is evaluated after it.
    pub fn new(oracle: O, context: &str) -> Result<Self, AdvisorError> {
        Self::with_config(oracle, context, AdvisorConfig::default())
    }

    pub fn with_config(
        oracle: O,
        context: &str,
        config: AdvisorConfig,
    ) -> Result<Self, AdvisorError> {
        let mode = AdviceMode::from_context(context)?;
        debug!(mode = mode.name(), "inlining advisor constructed");
        Ok(Self {
            oracle: OracleAdapter::new(oracle),
            mode,
            log: DecisionLog::new(),
            config,
        })
    }

    pub fn mode_name(&self) -> &'static str {
        self.mode.name()
    }

    /// Produce the final verdict for one call site. Invoked exactly once
    /// per site by the host traversal.
    pub fn evaluate(&mut self, site: &CallSite) -> Result<bool, AdvisorError> {
        let verdict = self.oracle.evaluate(site);

        if self.config.log_decisions {
            // Audit trail only; a site without a location is omitted.
            if let Some(location) = &site.location {
                self.log.record_location(location.short_form());
            }
        }

        let long_form = site.location.as_ref().map(LocationChain::long_form);

        let inlined = match &self.mode {
            AdviceMode::Default => self.oracle.accept(verdict),
            AdviceMode::ForceReject => {
                self.oracle.abandon(verdict);
                self.oracle.substitute(false)
            }
            AdviceMode::ForceAccept => {
                self.oracle.abandon(verdict);
                self.oracle.substitute(true)
            }
            AdviceMode::Replay(table) => {
                let key = long_form.as_deref().ok_or_else(|| missing_location(site))?;
                match table.lookup(key) {
                    Some(forced) => {
                        self.oracle.abandon(verdict);
                        self.oracle.substitute(forced)
                    }
                    None => self.oracle.accept(verdict),
                }
            }
        };

        if self.config.log_decisions {
            let location = long_form.ok_or_else(|| missing_location(site))?;
            self.log
                .record_decision(DecisionRecord::new(&site.caller, &site.callee, location, inlined));
        }

        Ok(inlined)
    }

    /// Flush the run: serialize the report text. The output parses back
    /// through [`ReplayLog`](dynin_report::ReplayLog) unchanged.
    pub fn finalize(self) -> String {
        self.log.render()
    }
}

fn missing_location(site: &CallSite) -> AdvisorError {
    AdvisorError::MissingLocation {
        caller: site.caller.clone(),
        callee: site.callee.clone(),
    }
}

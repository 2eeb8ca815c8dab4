use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise the tracing subscriber once per process, honouring
/// `RUST_LOG` when set.
pub fn init_logging() {
    init_logging_with("dynin=info");
}

/// Same as [`init_logging`] but with an explicit fallback filter. Later
/// calls are no-ops, whichever entry point ran first.
pub fn init_logging_with(default_filter: &str) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    });
}

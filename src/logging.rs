//! Diagnostic logging for the bomgraph CLI.
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays reserved
//! for the generated document.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither a flag nor `RUST_LOG` says otherwise
const DEFAULT_FILTER: &str = "bomgraph=warn";

/// Picks the log filter for the given flags.
///
/// `--verbose` wins over `--quiet`; without either flag `RUST_LOG` is
/// honoured when it parses.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("bomgraph=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logger(verbose: bool, quiet: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

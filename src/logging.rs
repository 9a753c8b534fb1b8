//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries only the announcements and the
//! output of the steps themselves.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "hs_deploy=debug";

/// Install the global subscriber
///
/// `--verbose` wins over `RUST_LOG`; otherwise `RUST_LOG` is honored and
/// falls back to warnings only.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    // A subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

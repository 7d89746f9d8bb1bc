//! Diagnostic output through `tracing`
//!
//! The library only emits events; the binary installs a formatting
//! subscriber writing to stderr. `RUST_LOG` takes precedence over the
//! verbosity flags.

use tracing_subscriber::EnvFilter;

/// Filter directive for a count of `-v` flags
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "modern_art=warn",
        1 => "modern_art=info",
        2 => "modern_art=debug",
        _ => "modern_art=trace",
    }
}

/// Build the event filter, preferring `RUST_LOG` when it is set
pub fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed, which leaves
/// the existing one in place.
pub fn init(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

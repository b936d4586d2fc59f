//! Tracing setup for the opgen CLI.
//!
//! Logs go to stderr. `RUST_LOG`, when set, wins over the verbosity flags.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the given verbosity flags.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "opgen=warn";
    }
    match verbose {
        0 => "opgen=info",
        1 => "opgen=debug",
        _ => "opgen=trace",
    }
}

/// Install the global subscriber.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

//! Diagnostic output via `tracing`.
//!
//! Progress and diagnostics go to stderr so stdout carries only the final
//! report. Lines carry the level but no timestamp. `RUST_LOG` takes
//! precedence over `-v`.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,l10nctl={level},l10n={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_writer(std::io::stderr)
        .try_init();
}

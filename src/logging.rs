//! Logging setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
///
/// `verbose` adds the debug echo of every extracted member. A progress bar
/// already reports each class, so only warnings get through while it is up;
/// without one the per-class INFO lines are the progress output.
pub fn default_directive(verbose: bool, progress: bool) -> &'static str {
    if verbose {
        "surfacedoc=debug"
    } else if progress {
        "warn"
    } else {
        "surfacedoc=info"
    }
}

/// Initialize tracing on stderr
pub fn init(verbose: bool, progress: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, progress)));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

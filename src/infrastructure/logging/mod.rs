// Logging module - Logging infrastructure
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use std::io;

/// Filter directive for every run. `--debug` only controls the `Called ...`
/// trace, never the tracing level.
pub const DEFAULT_DIRECTIVE: &str = "greeter=warn";

/// Initialize logging system
///
/// The filter is fixed rather than read from the environment, so a plain run
/// leaves stderr untouched.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_DIRECTIVE))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_target(true)
                .with_level(true)
                .without_time()
        )
        .try_init()?;

    tracing::debug!("Greeter logging system initialized");
    Ok(())
}

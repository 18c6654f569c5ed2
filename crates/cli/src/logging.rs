use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log level for a `-v` count. Zero keeps stderr quiet apart from warnings.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber.
///
/// An explicit `-v` wins; otherwise `RUST_LOG` is honored, falling back to `warn`.
pub fn setup_logging(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new(level_for(verbose))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(0)))
    };

    // a subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

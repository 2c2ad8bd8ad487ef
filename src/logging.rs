use tracing_subscriber::EnvFilter;

/// Initialise logging for a host process. The default level is `info`; debug
/// level can be enabled via the settings file, and only then does the
/// `RUST_LOG` environment variable get a say.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    // With debug logging off we force `info` regardless of `RUST_LOG`, so a
    // stray environment variable cannot flood an interactive session.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

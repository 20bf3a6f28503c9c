use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default log filter: `debug` when asked for, or when the runner has step
/// debug logging enabled (`RUNNER_DEBUG=1`), `info` otherwise
pub fn default_filter(verbose: bool) -> &'static str {
    let runner_debug = std::env::var("RUNNER_DEBUG").map(|v| v == "1").unwrap_or(false);
    if verbose || runner_debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the global tracing subscriber; `RUST_LOG` overrides the default filter
pub fn init(verbose: bool) {
    let filter = default_filter(verbose);
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter() {
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}

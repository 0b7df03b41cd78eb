use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Quiet enough that a failing run prints only its
/// one-line diagnostic.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Events go to stderr; stdout carries only program output.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

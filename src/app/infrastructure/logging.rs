use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "notebook_editor=info";

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, falling back to `notebook_editor=info`. Output goes to
/// stderr so that stdout stays clean for the resolved config.
/// Returns false when a subscriber was already installed.
pub fn init() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    tracing::debug!(filter = DEFAULT_FILTER, "tracing initialized");
    true
}

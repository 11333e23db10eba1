use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise this crate, the calling binary and
/// `tower_http` log at `default_level`.
pub fn init_tracing(binary: &str, default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "cv_analyzer={default_level},{binary}={default_level},tower_http={default_level}"
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

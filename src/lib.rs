pub mod banner;
pub mod config;
pub mod engine;
pub mod session;
pub mod translator;

pub use engine::convert;
pub use session::{SessionStore, Shell};
pub use translator::{translate, translate_detailed, Translation};

/// Install the stderr `tracing` subscriber. `RUST_LOG` overrides `default_filter`.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

//! Structured logging setup.
//!
//! `RUST_LOG` takes precedence; otherwise the filter from
//! [`LoggingConfig`](crate::config::LoggingConfig) applies.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // resource_type in the actor spans already says where a line came from
        .compact()
        .init();
}

//! Tracing setup
//!
//! Installs a global `tracing-subscriber` formatter once per process.
//! `RUST_LOG` wins over the configured filter when it is set.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default directive when neither `RUST_LOG` nor a setting provides one
pub const DEFAULT_FILTER: &str = "iou_wizard=info";

/// Initializes the global tracing subscriber.
///
/// Output goes to stderr so CLI output on stdout stays machine readable.
pub fn init_tracing(filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(filter.unwrap_or(DEFAULT_FILTER)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();

        tracing::debug!("tracing initialized");
    });
}

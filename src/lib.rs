//! HPD 311 client - Rust library
//!
//! Typed client for the NYC 311 service-request API: submit housing (HPD)
//! complaints and look up their status by SR number.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;

pub use api::Nyc311Client;
pub use config::{ClientConfig, SubscriptionKey};
pub use error::{ApiError, ApiResult, AppError, Result};

/// Initialize logging
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug for this
/// crate when `verbose` is on.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose {
        "hpd_311_client=debug,info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

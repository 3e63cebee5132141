//! # tilequote-cli
//!
//! Library half of the `tilequote` binary: configuration, errors and the
//! subcommand implementations, kept out of `main.rs` so they can be tested.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing ────────► RUST_LOG or "warn,tilequote=info,sqlx=warn"  │
//! │  2. AppConfig::from_env ─► TILEQUOTE_DB_PATH, _COUNTRY_CODE, ...        │
//! │  3. Parse subcommand                                                    │
//! │  4. Open database ───────► only for save/quotes/presets/workspace       │
//! │  5. Print result to stdout, errors to stderr                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;

pub use config::{AppConfig, ConfigError};
pub use error::{CliError, CliResult};

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,tilequote=info,sqlx=warn";

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout carries only quote text, links and JSON.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tilequote_db=trace` - Trace the database layer only
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

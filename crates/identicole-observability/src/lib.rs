//! Identicole Observability Module
//!
//! Configures `tracing` output for the Identicole binaries:
//! - Console logging to stderr (stdout is left to command output)
//! - Daily-rolling JSON log files when `LOG_DIR` is set
//!
//! This module can be enabled or disabled at compile time via the `observability` feature flag.
//! At runtime, observability can be further controlled via the `OBSERVABILITY_ENABLED` environment variable.
//!
//! # Features
//!
//! - `observability` (default): Enables file logging in addition to the console
//!
//! # Examples
//!
//! ```no_run
//! use identicole_observability::init_tracing;
//!
//! fn main() {
//!     init_tracing();
//!     // ... application code ...
//! }
//! ```

pub mod basic_logging;
pub mod settings;

#[cfg(feature = "observability")]
pub mod logging;

pub use basic_logging::init_basic_console_logging;
pub use settings::{LogSettings, is_observability_enabled};

#[cfg(feature = "observability")]
pub use logging::init_tracing;

/// Console-only tracing initialization when the feature is disabled
#[cfg(not(feature = "observability"))]
pub fn init_tracing() {
    init_basic_console_logging();
}

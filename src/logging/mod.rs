//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted logs
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! Findings are also emitted on the `leakscan::audit` target; see
//! [`crate::anonymization::audit`].
//!
//! # Example
//!
//! ```no_run
//! use leakscan::logging::init_logging;
//! use leakscan::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Scan started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the completion of a scan or anonymization pass
///
/// # Example
///
/// ```no_run
/// use leakscan::log_scan_complete;
/// use std::time::Duration;
///
/// log_scan_complete!("anonymize", 3, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_scan_complete {
    ($operation:expr, $findings:expr, $duration:expr) => {
        tracing::info!(
            operation = $operation,
            findings = $findings,
            duration_ms = $duration.as_millis() as u64,
            "Scan completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use leakscan::log_error_with_context;
/// use leakscan::domain::LeakscanError;
///
/// let error = LeakscanError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

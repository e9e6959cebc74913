//! Audit logging module
//!
//! Every finding is emitted as a `tracing` event under the
//! `leakscan::audit` target. An [`AuditLogger`] can additionally append one
//! entry per anonymization pass to a dedicated file.

pub mod logger;

pub use logger::{hash_value, record_finding, AuditLogger, AUDIT_TARGET};

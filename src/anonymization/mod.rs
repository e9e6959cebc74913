//! Anonymization module for Leakscan
//!
//! This module turns detectors into rules and runs them over free text. It
//! can report which rules matched, classify a single token, or rewrite the
//! matched values in place.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Rules**: named matchers with severity and an optional anonymization policy
//! - **Catalog**: factory functions for the built-in rule sets
//! - **Tokenizer**: whitespace splitting for detection, punctuation-aware
//!   splitting for anonymization
//! - **Anonymizer**: redaction and masking strategies
//! - **Audit**: `tracing` events and an optional audit file, values hashed
//!
//! # Usage
//!
//! ```rust
//! use leakscan::anonymization::{catalog, ScanEngine};
//!
//! let engine = ScanEngine::new(catalog::default_redacting_rule_set());
//! let (text, has_findings) = engine.anonymize_findings("send it to joao@ifood.com.br");
//! assert_eq!(text, "send it to <REDACTED>");
//! assert!(has_findings);
//! ```

pub mod anonymizer;
pub mod audit;
pub mod catalog;
pub mod engine;
pub mod models;
pub mod report;
pub mod rules;
pub mod tokenizer;

// Re-export main types
pub use engine::ScanEngine;
pub use models::{AnonymizationOutcome, DefaultCatalogResult, DetectionResult, Finding};
pub use report::AnonymizationReport;
pub use rules::{AnonymizeOptions, AnonymizeStrategy, Rule, RuleSet};

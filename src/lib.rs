// Leakscan - PII detection and anonymization for free text
// Copyright (c) 2025 Leakscan Contributors
// Licensed under the MIT License

//! # Leakscan - PII detection and anonymization
//!
//! Leakscan finds personally identifiable information in free text (log
//! lines, chat transcripts, serialized JSON) and rewrites it before the
//! text leaves your system.
//!
//! ## Overview
//!
//! This library provides:
//! - **Detectors** for Brazilian CPF/CNPJ, e-mail, IPv4/IPv6, payment cards,
//!   phone numbers, US SSNs, bank accounts, links, UUIDs, VINs and postal
//!   addresses, built from composable [`detector::Matcher`] predicates
//! - **Rules** that name a detector, grade it by severity and optionally
//!   attach a redact or mask policy
//! - **Scanning** of multi-line text into a per-rule found/not-found map
//! - **Anonymization** of matched values with an audit report that never
//!   holds plaintext
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detector`] - Matchers, checksums and the built-in detectors
//! - [`anonymization`] - Rules, catalogs, the scan engine and reporting
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use leakscan::anonymization::catalog::default_redacting_rule_set;
//! use leakscan::anonymization::ScanEngine;
//!
//! let engine = ScanEngine::new(default_redacting_rule_set());
//!
//! let found = engine.find(&["my cpf is 111.444.777-35"]);
//! assert!(found.is_found("brazilian_CPF"));
//!
//! let (text, has_findings) = engine.anonymize_findings("ping 180.112.90.22 now");
//! assert_eq!(text, "ping <REDACTED> now");
//! assert!(has_findings);
//! ```
//!
//! ## Custom Rules
//!
//! ```rust
//! use leakscan::anonymization::{Rule, RuleSet, ScanEngine};
//! use leakscan::detector::{builtin, Matcher};
//!
//! let internal_host = Matcher::new(|s| s.ends_with(".corp.internal"));
//! let rules = RuleSet::new()
//!     .with_rule("host", Rule::new("internal_host", internal_host).redact("[HOST]"))
//!     .with_rule("email", Rule::new("email_address", builtin::email()).mask("*", 4));
//!
//! let engine = ScanEngine::new(rules);
//! let (text, _) = engine.anonymize_findings("db01.corp.internal paged joao@ifood.com.br");
//! assert_eq!(text, "[HOST] paged ****@ifood.com.br");
//! ```
//!
//! ## Error Handling
//!
//! Configuration and rule validation return [`domain::Result`]. Matching
//! itself never fails: malformed input is simply not a match.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod detector;
pub mod domain;
pub mod logging;

//! Anonymization strategy module
//!
//! Provides the rewriting strategies applied to detected values.

pub mod masking;
pub mod redaction;

pub use masking::MaskingStrategy;
pub use redaction::RedactionStrategy;

use crate::anonymization::rules::{AnonymizeOptions, AnonymizeStrategy};

/// Trait for anonymization strategy implementations
pub trait Anonymizer: Send + Sync {
    /// Rewrite `value` inside `text`.
    ///
    /// Returns `None` when the text is left unchanged.
    fn rewrite(&self, text: &str, value: &str) -> Option<String>;
}

/// Build the strategy described by a rule's options
pub fn strategy_for(options: &AnonymizeOptions) -> Box<dyn Anonymizer> {
    match options.strategy {
        AnonymizeStrategy::Redact => {
            Box::new(RedactionStrategy::new(options.anonymize_string.clone()))
        }
        AnonymizeStrategy::Mask => Box::new(MaskingStrategy::new(
            options.anonymize_string.clone(),
            options.anonymize_length,
        )),
    }
}

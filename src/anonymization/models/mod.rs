//! Result data models

pub mod detection;
pub mod finding;

pub use detection::{DefaultCatalogResult, DetectionResult};
pub use finding::{AnonymizationOutcome, Finding};

//! Domain types shared across Leakscan.
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, LeakscanError>`]:
//!
//! ```rust
//! use leakscan::domain::{LeakscanError, Result};
//!
//! fn example() -> Result<()> {
//!     let rules = leakscan::anonymization::catalog::default_rule_set();
//!     rules.validate()?;
//!     Ok(())
//! }
//! ```
//!
//! Note that detection and anonymization themselves are infallible: a value
//! that fails a checksum is simply "not found", never an error.

pub mod errors;
pub mod result;

pub use errors::{LeakscanError, RuleError};
pub use result::Result;

//! Result type alias for Leakscan

use super::errors::LeakscanError;

/// Result type alias for Leakscan operations
///
/// # Examples
///
/// ```
/// use leakscan::domain::result::Result;
/// use leakscan::domain::errors::LeakscanError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LeakscanError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LeakscanError>;

/*!
 * Error Types
 * Guard error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for checked guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Errors produced by the checked guard operations
///
/// Callback failures are never wrapped in this type: the `*_fallible` scoped
/// operations hand the caller's own error back unchanged.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
#[non_exhaustive]
pub enum GuardError {
    #[error("Index {index} out of bounds for length {len}")]
    #[diagnostic(
        code(guard::index_out_of_bounds),
        help("Validate the index against len() inside the same scoped callback.")
    )]
    IndexOutOfBounds { index: usize, len: usize },
}

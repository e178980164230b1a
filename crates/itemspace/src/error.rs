//! Error types for decoration construction.

use thiserror::Error;

/// Errors that can occur when building a spacing decoration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpacingConfigError {
    /// A grid needs at least one column.
    #[error("span count must be at least 1")]
    ZeroSpanCount,
}

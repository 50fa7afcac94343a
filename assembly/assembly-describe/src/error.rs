//! Error types for description updates.

use thiserror::Error;

/// Result type alias for description update operations.
pub type DescribeResult<T> = Result<T, DescribeError>;

/// Precondition failures for a description update pass.
///
/// Instances with an invalid or absent bounding box are skipped, not
/// errored; only whole-pass preconditions surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescribeError {
    /// No design document is open in the host.
    #[error("no active design document")]
    NoActiveDesign,

    /// Nothing relevant is selected.
    #[error("no component instances selected")]
    NoInstances,
}

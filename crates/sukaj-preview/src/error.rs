//! Preview error types.

use thiserror::Error;

/// Errors raised by the preview lifecycle.
///
/// The resolver itself is total; only user-driven lifecycle actions taken in
/// the wrong state can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// An action is not allowed in the current lifecycle state.
    #[error("Invalid preview transition: cannot {action} while {from}")]
    InvalidTransition { from: String, action: String },
}

//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation outcome messages.
///
/// Confirmations print as plain informational lines; warnings carry the
/// `!!!` prefix the menu uses for everything non-fatal that still needs the
/// user's attention (zero rows affected, constraint rejections, misses).
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new warning status.
    pub fn warning(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "{}", self.message)
        } else {
            write!(f, "!!! WARNING: {}", self.message)
        }
    }
}

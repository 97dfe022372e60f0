//! Store Errors
//!
//! Every failure is recoverable at the call that raised it.

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Transport error or non-success response while reading
    LoadFailure(String),
    /// Transport error or non-success response while writing
    SaveFailure(String),
    /// Topic name outside the fixed list
    RecordNotFound(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::LoadFailure(msg) => write!(f, "Load failed: {}", msg),
            StoreError::SaveFailure(msg) => write!(f, "Save failed: {}", msg),
            StoreError::RecordNotFound(name) => write!(f, "Reflection not found: {}", name),
        }
    }
}

impl std::error::Error for StoreError {}

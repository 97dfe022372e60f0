//! Record Lookup
//!
//! Result of resolving a topic name, consumed by the view's render branch.

use super::reflection::Reflection;
use crate::error::{StoreError, StoreResult};

/// Outcome of looking up a reflection by topic name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Reflection),
    /// Carries the requested name for the "not found" view
    NotFound(String),
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_result(self) -> StoreResult<Reflection> {
        match self {
            Lookup::Found(reflection) => Ok(reflection),
            Lookup::NotFound(name) => Err(StoreError::RecordNotFound(name)),
        }
    }
}

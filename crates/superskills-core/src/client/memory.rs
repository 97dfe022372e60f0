//! In-Memory Client
//!
//! Holds the document in process. Counts calls and can be told to fail,
//! which is what the store tests drive.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::traits::DocumentClient;
use crate::domain::Document;
use crate::error::{StoreError, StoreResult};

#[derive(Default)]
pub struct MemoryClient {
    document: RefCell<Option<Document>>,
    loads: Cell<usize>,
    saves: Cell<usize>,
    fail_loads: Cell<bool>,
    fail_saves: Cell<bool>,
}

impl MemoryClient {
    /// Empty store: loads fail until something is saved
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        let client = Self::default();
        client.document.replace(Some(document));
        client
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.set(fail);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Last document written (or seeded)
    pub fn stored(&self) -> Option<Document> {
        self.document.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DocumentClient for MemoryClient {
    async fn load(&self) -> StoreResult<Document> {
        self.loads.set(self.loads.get() + 1);
        if self.fail_loads.get() {
            return Err(StoreError::LoadFailure("status 503 Service Unavailable".to_string()));
        }
        self.document
            .borrow()
            .clone()
            .ok_or_else(|| StoreError::LoadFailure("status 404 Not Found".to_string()))
    }

    async fn save(&self, document: &Document) -> StoreResult<()> {
        self.saves.set(self.saves.get() + 1);
        if self.fail_saves.get() {
            return Err(StoreError::SaveFailure("status 401 Unauthorized".to_string()));
        }
        let mut stored = document.clone();
        stored.version = document.effective_version();
        self.document.replace(Some(stored));
        Ok(())
    }
}

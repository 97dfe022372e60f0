//! Document Client - Core Trait
//!
//! Abstract access to the single remote document. Implementations can talk
//! HTTP, hold the document in memory, etc.

use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::Document;
use crate::error::StoreResult;

/// Whole-document read/write against one fixed document id
///
/// One attempt per call, no retries. Futures are not `Send` because the
/// browser fetch backend is single-threaded.
#[async_trait(?Send)]
pub trait DocumentClient {
    /// Read the latest revision
    async fn load(&self) -> StoreResult<Document>;

    /// Overwrite the document
    async fn save(&self, document: &Document) -> StoreResult<()>;
}

/// Shared clients, e.g. a test keeping a handle to inspect call counts
#[async_trait(?Send)]
impl<T: DocumentClient + ?Sized> DocumentClient for Rc<T> {
    async fn load(&self) -> StoreResult<Document> {
        (**self).load().await
    }

    async fn save(&self, document: &Document) -> StoreResult<()> {
        (**self).save(document).await
    }
}

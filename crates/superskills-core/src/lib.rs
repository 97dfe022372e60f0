//! Visual Superskills Core
//!
//! Layered the same way top to bottom:
//! - domain: reflection records, topics, the stored document shape
//! - client: remote document store access
//! - session: dirty tracking and autosave debounce (no I/O)
//! - store: async driver tying a session to a client

pub mod domain;
pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod share;
pub mod store;

pub use client::{DocumentClient, JsonBinClient, MemoryClient};
pub use config::{RemoteConfig, AUTOSAVE_DELAY_MS, DOCUMENT_QUERY_PARAM};
pub use error::{StoreError, StoreResult};
pub use session::{AutosaveTicket, ReflectionSession, SaveRequest};
pub use store::{ReflectionStore, SaveOutcome};

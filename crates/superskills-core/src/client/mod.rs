//! Client Layer
//!
//! Remote document store access.

mod traits;
mod jsonbin;
mod memory;

pub use traits::DocumentClient;
pub use jsonbin::JsonBinClient;
pub use memory::MemoryClient;

//! Persistence - the store's state as a single named blob in key-value
//! storage.
//!
//! The layout mirrors a browser's local storage: string keys, string values.
//! The full store state is encoded as one versioned [`StoreSnapshot`] blob
//! under [`STORAGE_KEY`] and rehydrated in full at session start.

mod file;
mod in_memory;
mod snapshot;
mod store;

pub use file::FileStateStore;
pub use in_memory::InMemoryStateStore;
pub use snapshot::{StoreSnapshot, SCHEMA_VERSION};
pub use store::{StateError, StateStore, STORAGE_KEY};

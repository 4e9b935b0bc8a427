//! Storage module for uploaded files
//!
//! Provides the local upload directory used for comment images.

mod local_storage;

pub use local_storage::{LocalStorage, StorageError, StoredFile};

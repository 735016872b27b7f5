#![forbid(unsafe_code)]

pub mod record;
pub mod repository;
pub mod sqlite;

pub use record::{ProgressRepository, RecordDecodeError, RecordError};
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};

//! Typed persistence port for student progress.
//!
//! Schema (version 1), one string value per key:
//!
//! | key                     | value                                     |
//! |-------------------------|-------------------------------------------|
//! | `studentName`           | raw name, only written when non-empty     |
//! | `completedLessons`      | JSON array of lesson ids, e.g. `[1,3]`    |
//! | `progressSchemaVersion` | `"1"`                                     |
//!
//! Records written before the version key existed are read as version 1.
//! Duplicate ids in the stored array are tolerated and collapse into a set.

use std::collections::BTreeSet;
use std::sync::Arc;

use course_core::model::LessonId;
use thiserror::Error;

use crate::repository::{KeyValueStore, StorageError};

pub const STUDENT_NAME_KEY: &str = "studentName";
pub const COMPLETED_LESSONS_KEY: &str = "completedLessons";
pub const SCHEMA_VERSION_KEY: &str = "progressSchemaVersion";
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordDecodeError {
    #[error("completed lessons value is not a JSON array of ids: {0}")]
    InvalidJson(String),

    #[error("unsupported progress schema version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Decode(#[from] RecordDecodeError),
}

/// Encodes the completed set as an ascending JSON array.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn encode_completed(completed: &BTreeSet<LessonId>) -> Result<String, StorageError> {
    serde_json::to_string(completed).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decodes a stored completed list.
///
/// # Errors
///
/// Returns `RecordDecodeError::InvalidJson` for anything that is not an array
/// of non-negative integers.
pub fn decode_completed(raw: &str) -> Result<BTreeSet<LessonId>, RecordDecodeError> {
    let ids: Vec<LessonId> =
        serde_json::from_str(raw).map_err(|e| RecordDecodeError::InvalidJson(e.to_string()))?;
    Ok(ids.into_iter().collect())
}

/// Checks the stored schema version. A missing version is treated as version 1.
///
/// # Errors
///
/// Returns `RecordDecodeError::UnsupportedVersion` for any other value.
pub fn check_schema_version(raw: Option<&str>) -> Result<(), RecordDecodeError> {
    match raw.map(str::trim) {
        None => Ok(()),
        Some(value) if value.parse::<u32>().ok() == Some(SCHEMA_VERSION) => Ok(()),
        Some(value) => Err(RecordDecodeError::UnsupportedVersion(value.to_string())),
    }
}

/// Reads and writes the progress record through a `KeyValueStore`.
#[derive(Clone)]
pub struct ProgressRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl ProgressRepository {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the stored student name. Empty values are reported as absent.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Storage` if the backend cannot be read.
    pub async fn load_name(&self) -> Result<Option<String>, RecordError> {
        let name = self.kv.get(STUDENT_NAME_KEY).await?;
        Ok(name.filter(|value| !value.is_empty()))
    }

    /// Load the stored completed set.
    ///
    /// `None` means the list was never written; `Some(empty)` means a session
    /// was started but nothing has been completed yet.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Decode` when the version or list cannot be decoded.
    pub async fn load_completed(&self) -> Result<Option<BTreeSet<LessonId>>, RecordError> {
        let version = self.kv.get(SCHEMA_VERSION_KEY).await?;
        check_schema_version(version.as_deref())?;

        let Some(raw) = self.kv.get(COMPLETED_LESSONS_KEY).await? else {
            return Ok(None);
        };
        Ok(Some(decode_completed(&raw)?))
    }

    /// Persist the name. Empty names are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    pub async fn save_name(&self, name: &str) -> Result<(), StorageError> {
        if name.is_empty() {
            return Ok(());
        }
        self.kv.set(STUDENT_NAME_KEY, name).await
    }

    /// Persist the completed set together with the schema version.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or a write fails.
    pub async fn save_completed(&self, completed: &BTreeSet<LessonId>) -> Result<(), StorageError> {
        let encoded = encode_completed(completed)?;
        self.kv
            .set(SCHEMA_VERSION_KEY, &SCHEMA_VERSION.to_string())
            .await?;
        self.kv.set(COMPLETED_LESSONS_KEY, &encoded).await
    }

    /// Remove every progress key.
    ///
    /// # Errors
    ///
    /// Returns the first `StorageError` encountered; later keys are still attempted.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let mut first_err = None;
        for key in [STUDENT_NAME_KEY, COMPLETED_LESSONS_KEY, SCHEMA_VERSION_KEY] {
            if let Err(err) = self.kv.remove(key).await {
                tracing::warn!(key, error = %err, "failed to remove progress key");
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

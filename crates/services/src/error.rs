//! Shared error types for the services crate.

use thiserror::Error;

use storage::sqlite::SqliteInitError;

/// Errors a `LinkOpener` may report. They are logged, never shown to the student.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LinkOpenError {
    #[error("link opener is unavailable: {0}")]
    Unavailable(String),
    #[error("new browsing context was blocked")]
    Blocked,
}

/// Errors emitted by `CertificateService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CertificateError {
    #[error("a student name is required to issue a certificate")]
    EmptyName,
    #[error("certificate could not be rendered: {0}")]
    Render(String),
    #[error("certificate could not be saved: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] course_core::Error),
}

use std::path::PathBuf;
use std::sync::Arc;

use course_core::model::LessonCatalog;
use storage::repository::Storage;

use crate::Clock;
use crate::certificate::{CertificateService, PdfCertificateRenderer};
use crate::error::AppServicesError;
use crate::link_opener::LinkOpener;
use crate::progress_store::ProgressStore;

/// Assembles app-facing services. Building it runs progress initialization.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<LessonCatalog>,
    progress: Arc<ProgressStore>,
    certificates: Arc<CertificateService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// built-in catalog is invalid.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        opener: Arc<dyn LinkOpener>,
        download_dir: PathBuf,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(&storage, clock, opener, download_dir).await
    }

    /// Build services on top of an existing storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Catalog` if the built-in catalog is invalid.
    pub async fn from_storage(
        storage: &Storage,
        clock: Clock,
        opener: Arc<dyn LinkOpener>,
        download_dir: PathBuf,
    ) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(LessonCatalog::builtin()?);
        let progress = Arc::new(ProgressStore::initialize(Arc::clone(&storage.kv), opener).await);
        let certificates = Arc::new(CertificateService::new(
            clock,
            Arc::new(PdfCertificateRenderer),
            download_dir,
        ));

        Ok(Self {
            catalog,
            progress,
            certificates,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<LessonCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn certificates(&self) -> Arc<CertificateService> {
        Arc::clone(&self.certificates)
    }
}

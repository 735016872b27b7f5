use std::sync::Arc;

use course_core::model::LessonCatalog;
use services::{AppServices, CertificateService, ProgressStore};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<LessonCatalog>;
    fn progress(&self) -> Arc<ProgressStore>;
    fn certificates(&self) -> Arc<CertificateService>;
}

impl UiApp for AppServices {
    fn catalog(&self) -> Arc<LessonCatalog> {
        AppServices::catalog(self)
    }

    fn progress(&self) -> Arc<ProgressStore> {
        AppServices::progress(self)
    }

    fn certificates(&self) -> Arc<CertificateService> {
        AppServices::certificates(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<LessonCatalog>,
    progress: Arc<ProgressStore>,
    certificates: Arc<CertificateService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            certificates: app.certificates(),
        }
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

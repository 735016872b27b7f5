#![forbid(unsafe_code)]

pub mod app_services;
pub mod certificate;
pub mod error;
pub mod link_opener;
pub mod progress_store;

pub use course_core::Clock;

pub use app_services::AppServices;
pub use certificate::{
    CertificateDownload, CertificateFields, CertificateRenderer, CertificateService,
    PdfCertificateRenderer, download_file_name,
};
pub use error::{AppServicesError, CertificateError, LinkOpenError};
pub use link_opener::{LinkOpener, OpenStrategy};
pub use progress_store::ProgressStore;

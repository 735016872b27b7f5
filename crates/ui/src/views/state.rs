use services::{CertificateDownload, CertificateError};

/// One-shot outcome of the certificate download button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadState {
    Idle,
    Working,
    Saved(String),
    Failed(String),
}

impl DownloadState {
    #[must_use]
    pub fn from_result(result: &Result<CertificateDownload, CertificateError>) -> Self {
        match result {
            Ok(download) => Self::Saved(download.path.display().to_string()),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    #[must_use]
    pub fn is_working(&self) -> bool {
        matches!(self, Self::Working)
    }
}

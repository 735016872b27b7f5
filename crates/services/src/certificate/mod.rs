use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use course_core::time::format_issue_date;

use crate::Clock;
use crate::error::CertificateError;

mod pdf;

pub use pdf::PdfCertificateRenderer;

pub const COURSE_NAME: &str = "AI Prompting";
pub const INSTRUCTOR: &str = "Rahul Jadhav";
pub const INSTITUTION: &str = "VPPCOE & VA";

const FILE_SUFFIX: &str = "_AI_Prompting_Certificate.pdf";
const FALLBACK_STEM: &str = "Student";

/// Text printed on a certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateFields {
    pub student_name: String,
    pub course: String,
    pub instructor: String,
    pub institution: String,
    pub issued_on: NaiveDate,
}

impl CertificateFields {
    #[must_use]
    pub fn issue_date_label(&self) -> String {
        format_issue_date(self.issued_on)
    }
}

/// Turns certificate fields into file bytes.
pub trait CertificateRenderer: Send + Sync {
    /// Render the certificate document.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::Render` if the document cannot be produced.
    fn render(&self, fields: &CertificateFields) -> Result<Vec<u8>, CertificateError>;
}

/// Where a generated certificate was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDownload {
    pub path: PathBuf,
    pub size_bytes: usize,
}

/// Builds certificate files for a student and drops them in the download directory.
#[derive(Clone)]
pub struct CertificateService {
    clock: Clock,
    renderer: Arc<dyn CertificateRenderer>,
    download_dir: PathBuf,
}

impl CertificateService {
    #[must_use]
    pub fn new(clock: Clock, renderer: Arc<dyn CertificateRenderer>, download_dir: PathBuf) -> Self {
        Self {
            clock,
            renderer,
            download_dir,
        }
    }

    #[must_use]
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Fields for the given student, dated today.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::EmptyName` if the trimmed name is empty.
    pub fn fields_for(&self, student_name: &str) -> Result<CertificateFields, CertificateError> {
        let student_name = student_name.trim();
        if student_name.is_empty() {
            return Err(CertificateError::EmptyName);
        }
        Ok(CertificateFields {
            student_name: student_name.to_string(),
            course: COURSE_NAME.to_string(),
            instructor: INSTRUCTOR.to_string(),
            institution: INSTITUTION.to_string(),
            issued_on: self.clock.today(),
        })
    }

    /// Render and save a certificate.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::EmptyName` for a blank name,
    /// `CertificateError::Render` if rendering fails and
    /// `CertificateError::Io` if the file cannot be written.
    pub async fn generate(&self, student_name: &str) -> Result<CertificateDownload, CertificateError> {
        let fields = self.fields_for(student_name)?;
        let bytes = self.renderer.render(&fields)?;

        tokio::fs::create_dir_all(&self.download_dir).await?;
        let path = self.download_dir.join(download_file_name(&fields.student_name));
        tokio::fs::write(&path, &bytes).await?;

        tracing::info!(path = %path.display(), size = bytes.len(), "certificate saved");
        Ok(CertificateDownload {
            path,
            size_bytes: bytes.len(),
        })
    }
}

/// File name for a student's certificate.
///
/// Whitespace runs become `_`; anything outside `[A-Za-z0-9_-]` is dropped so
/// the name can never escape the download directory.
#[must_use]
pub fn download_file_name(student_name: &str) -> String {
    let mut stem = String::with_capacity(student_name.len());
    let mut pending_gap = false;
    for ch in student_name.trim().chars() {
        if ch.is_whitespace() {
            pending_gap = true;
            continue;
        }
        if !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '-') {
            continue;
        }
        if pending_gap && !stem.is_empty() {
            stem.push('_');
        }
        pending_gap = false;
        stem.push(ch);
    }
    if stem.is_empty() {
        stem.push_str(FALLBACK_STEM);
    }
    format!("{stem}{FILE_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::time::fixed_clock;

    struct FailingRenderer;

    impl CertificateRenderer for FailingRenderer {
        fn render(&self, _fields: &CertificateFields) -> Result<Vec<u8>, CertificateError> {
            Err(CertificateError::Render("no fonts".to_string()))
        }
    }

    #[test]
    fn file_name_replaces_whitespace_runs() {
        assert_eq!(
            download_file_name("  Asha   Rao "),
            "Asha_Rao_AI_Prompting_Certificate.pdf"
        );
    }

    #[test]
    fn file_name_drops_path_characters() {
        assert_eq!(
            download_file_name("../etc/passwd"),
            "etcpasswd_AI_Prompting_Certificate.pdf"
        );
        assert_eq!(download_file_name("李"), "Student_AI_Prompting_Certificate.pdf");
    }

    #[test]
    fn fields_are_dated_from_the_clock() {
        let service = CertificateService::new(
            fixed_clock(),
            Arc::new(PdfCertificateRenderer),
            PathBuf::from("."),
        );
        let fields = service.fields_for(" Ravi ").unwrap();
        assert_eq!(fields.student_name, "Ravi");
        assert_eq!(fields.course, COURSE_NAME);
        assert_eq!(fields.issue_date_label(), "14/11/2023");
    }

    #[test]
    fn issue_date_follows_the_local_day() {
        let evening_utc = chrono::DateTime::parse_from_rfc3339("2023-11-14T20:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let india = chrono::FixedOffset::east_opt(19_800).unwrap();
        let service = CertificateService::new(
            Clock::fixed_in(evening_utc, india),
            Arc::new(PdfCertificateRenderer),
            PathBuf::from("."),
        );
        let fields = service.fields_for("Asha").unwrap();
        assert_eq!(fields.issue_date_label(), "15/11/2023");
    }

    #[test]
    fn blank_name_is_rejected() {
        let service = CertificateService::new(
            fixed_clock(),
            Arc::new(PdfCertificateRenderer),
            PathBuf::from("."),
        );
        assert!(matches!(service.fields_for("   "), Err(CertificateError::EmptyName)));
    }

    #[tokio::test]
    async fn generate_writes_pdf_into_download_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("downloads");
        let service =
            CertificateService::new(fixed_clock(), Arc::new(PdfCertificateRenderer), target.clone());

        let download = service.generate("Asha Rao").await.unwrap();
        assert_eq!(
            download.path,
            target.join("Asha_Rao_AI_Prompting_Certificate.pdf")
        );
        let bytes = std::fs::read(&download.path).unwrap();
        assert_eq!(bytes.len(), download.size_bytes);
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn render_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let service =
            CertificateService::new(fixed_clock(), Arc::new(FailingRenderer), dir.path().to_path_buf());
        let err = service.generate("Asha").await.unwrap_err();
        assert!(matches!(err, CertificateError::Render(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

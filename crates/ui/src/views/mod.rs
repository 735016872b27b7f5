mod certificate;
mod components;
mod landing;
mod lessons;
mod shell;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use certificate::CertificateView;
pub use components::{LessonCard, ProgressBar};
pub use landing::LandingView;
pub use lessons::LessonsView;
pub use shell::Shell;
pub use state::DownloadState;

mod certificate_vm;
mod lesson_vm;
mod progress_vm;

pub use certificate_vm::CertificateVm;
pub use lesson_vm::{LessonCardVm, map_lesson_cards};
pub use progress_vm::{ProgressVm, map_progress};

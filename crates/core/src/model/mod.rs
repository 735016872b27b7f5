mod catalog;
mod ids;
mod lesson;
mod session;

pub use ids::LessonId;

pub use catalog::{CatalogError, LessonCatalog};
pub use lesson::{Difficulty, LessonDescriptor, LessonDraft, LessonError};
pub use session::{Page, Session, SessionChange, normalize_student_name};

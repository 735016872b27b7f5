use thiserror::Error;

use crate::model::{CatalogError, LessonError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

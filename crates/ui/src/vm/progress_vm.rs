use std::collections::BTreeSet;

use course_core::model::{LessonCatalog, LessonId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed: usize,
    pub total: usize,
    pub remaining: usize,
    pub percent: u8,
    pub all_done: bool,
}

impl ProgressVm {
    #[must_use]
    pub fn summary_label(&self) -> String {
        format!("{} of {} lessons completed", self.completed, self.total)
    }

    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }
}

/// Progress against the catalog. Ids outside the catalog do not count.
#[must_use]
pub fn map_progress(catalog: &LessonCatalog, completed: &BTreeSet<LessonId>) -> ProgressVm {
    let done = catalog.completed_count(completed);
    ProgressVm {
        completed: done,
        total: catalog.len(),
        remaining: catalog.len().saturating_sub(done),
        percent: catalog.progress_percent(completed),
        all_done: catalog.all_completed(completed),
    }
}

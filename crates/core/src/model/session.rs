use std::collections::BTreeSet;
use std::fmt;

use crate::model::ids::LessonId;

/// The page the navigation shell is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Landing,
    Lessons,
    Certificate,
}

impl Page {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Lessons => "lessons",
            Page::Certificate => "certificate",
        }
    }

    /// Parses a page name. Unrecognized names fall back to `Landing`.
    #[must_use]
    pub fn from_name(raw: &str) -> Self {
        match raw.trim() {
            "lessons" => Page::Lessons,
            "certificate" => Page::Certificate,
            _ => Page::Landing,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which durable fields a transition touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    /// Only the page moved (or nothing changed); storage is untouched.
    None,
    /// The student name was set.
    Identity,
    /// The completed set gained a lesson.
    Progress,
    /// Everything was reset.
    Cleared,
}

impl SessionChange {
    #[must_use]
    pub fn touches_storage(self) -> bool {
        !matches!(self, SessionChange::None)
    }
}

/// In-memory record of the current page, student name and completed lessons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    page: Page,
    student_name: String,
    completed: BTreeSet<LessonId>,
}

impl Session {
    /// Rehydrate a session from persisted fields. The page always starts at `Landing`.
    #[must_use]
    pub fn restored(student_name: String, completed: BTreeSet<LessonId>) -> Self {
        Self {
            page: Page::Landing,
            student_name,
            completed,
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    #[must_use]
    pub fn completed(&self) -> &BTreeSet<LessonId> {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, id: LessonId) -> bool {
        self.completed.contains(&id)
    }

    /// A session has started once a student name is present.
    #[must_use]
    pub fn has_started(&self) -> bool {
        !self.student_name.is_empty()
    }

    /// Stores the name as given and moves to the lessons page.
    ///
    /// Trimming and emptiness checks belong to the caller; see [`normalize_student_name`].
    pub fn submit_name(&mut self, name: impl Into<String>) -> SessionChange {
        self.student_name = name.into();
        self.page = Page::Lessons;
        SessionChange::Identity
    }

    /// Marks a lesson complete. Already-completed ids are a no-op.
    pub fn complete_lesson(&mut self, id: LessonId) -> SessionChange {
        if self.completed.insert(id) {
            SessionChange::Progress
        } else {
            SessionChange::None
        }
    }

    pub fn go_to_certificate(&mut self) -> SessionChange {
        self.page = Page::Certificate;
        SessionChange::None
    }

    /// Back to the landing page; name and progress are kept.
    pub fn change_name(&mut self) -> SessionChange {
        self.page = Page::Landing;
        SessionChange::None
    }

    pub fn go_to_lessons(&mut self) -> SessionChange {
        self.page = Page::Lessons;
        SessionChange::None
    }

    pub fn start_over(&mut self) -> SessionChange {
        *self = Self::default();
        SessionChange::Cleared
    }
}

/// Trims a raw name input, returning `None` when nothing is left.
#[must_use]
pub fn normalize_student_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

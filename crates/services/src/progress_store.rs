use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use course_core::model::{LessonDescriptor, LessonId, Session, SessionChange};
use storage::ProgressRepository;
use storage::repository::KeyValueStore;

use crate::link_opener::LinkOpener;

/// Owns the session and keeps the persisted record in step with it.
///
/// Every operation applies a pure `Session` transition, then syncs storage.
/// Operations hand back the session as it stands when they finish, so an async
/// operation reflects transitions made while its write was pending. They never
/// fail: storage problems are logged and the in-memory state stays
/// authoritative.
pub struct ProgressStore {
    session: Mutex<Session>,
    records: ProgressRepository,
    opener: Arc<dyn LinkOpener>,
    // Serializes writes so a slower write can never land a stale snapshot.
    write_lock: tokio::sync::Mutex<()>,
}

impl ProgressStore {
    /// Load the persisted record and build the store.
    ///
    /// Unreadable fields fall back to their defaults (empty name, no completed
    /// lessons). The page always starts at the landing page.
    pub async fn initialize(kv: Arc<dyn KeyValueStore>, opener: Arc<dyn LinkOpener>) -> Self {
        let records = ProgressRepository::new(kv);

        let student_name = match records.load_name().await {
            Ok(name) => name.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored student name; using default");
                String::new()
            }
        };
        let completed = match records.load_completed().await {
            Ok(completed) => completed.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable completed lessons");
                BTreeSet::new()
            }
        };

        tracing::info!(
            has_name = !student_name.is_empty(),
            completed = completed.len(),
            "progress restored"
        );

        Self {
            session: Mutex::new(Session::restored(student_name, completed)),
            records,
            opener,
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    /// Store the name and move to the lessons page.
    ///
    /// The name is taken as given; trimming and rejecting blank input is the
    /// caller's job.
    pub async fn submit_name(&self, name: &str) -> Session {
        let change = self.apply(|s| s.submit_name(name)).1;
        tracing::info!("student name submitted");
        self.sync(change).await;
        self.snapshot()
    }

    /// Mark a lesson complete. Unknown ids are accepted as-is.
    pub async fn complete_lesson(&self, id: LessonId) -> Session {
        let change = self.apply(|s| s.complete_lesson(id)).1;
        tracing::debug!(lesson = %id, newly_completed = change.touches_storage(), "lesson completed");
        self.sync(change).await;
        self.snapshot()
    }

    /// Record completion, then ask the opener for the lesson URL.
    ///
    /// The completion is committed (and its write attempted) before the open
    /// request, so a blocked or failed open never costs the student credit.
    pub async fn open_lesson_and_complete(&self, lesson: &LessonDescriptor) -> Session {
        self.complete_lesson(lesson.id()).await;
        if let Err(err) = self.opener.open(lesson.url()) {
            tracing::warn!(lesson = %lesson.id(), url = %lesson.url(), error = %err, "lesson link did not open");
        }
        self.snapshot()
    }

    pub fn go_to_certificate(&self) -> Session {
        self.apply(Session::go_to_certificate).0
    }

    /// Back to the landing page, keeping name and progress.
    pub fn change_name(&self) -> Session {
        self.apply(Session::change_name).0
    }

    pub fn go_to_lessons(&self) -> Session {
        self.apply(Session::go_to_lessons).0
    }

    /// Reset to a fresh session and delete every persisted field.
    pub async fn start_over(&self) -> Session {
        let change = self.apply(Session::start_over).1;
        tracing::info!("progress cleared");
        self.sync(change).await;
        self.snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, transition: impl FnOnce(&mut Session) -> SessionChange) -> (Session, SessionChange) {
        let mut guard = self.lock();
        let change = transition(&mut guard);
        (guard.clone(), change)
    }

    async fn sync(&self, change: SessionChange) {
        if !change.touches_storage() {
            return;
        }

        let _guard = self.write_lock.lock().await;
        // Write whatever is current once the lock is held, not the snapshot the
        // caller saw.
        let current = self.snapshot();

        match change {
            SessionChange::None => {}
            SessionChange::Identity => {
                if let Err(err) = self.records.save_name(current.student_name()).await {
                    tracing::warn!(error = %err, "failed to persist student name");
                }
                self.save_completed(&current).await;
            }
            SessionChange::Progress => self.save_completed(&current).await,
            SessionChange::Cleared => {
                if let Err(err) = self.records.clear().await {
                    tracing::warn!(error = %err, "failed to clear persisted progress");
                }
            }
        }
    }

    async fn save_completed(&self, current: &Session) {
        // An empty list is written once a session has started, so a reload can
        // tell "started, nothing done" apart from "never started".
        if !current.has_started() && current.completed().is_empty() {
            return;
        }
        if let Err(err) = self.records.save_completed(current.completed()).await {
            tracing::warn!(error = %err, "failed to persist completed lessons");
        }
    }
}

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use course_core::model::{LessonCatalog, LessonId, Page, Session};
use course_core::time::fixed_clock;
use services::{AppServices, LinkOpenError, LinkOpener, ProgressStore};
use storage::InMemoryStore;
use storage::record::{COMPLETED_LESSONS_KEY, SCHEMA_VERSION_KEY, STUDENT_NAME_KEY};
use storage::repository::{KeyValueStore, Storage, StorageError};
use tokio::sync::Notify;
use url::Url;

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &Url) -> Result<(), LinkOpenError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

struct BlockedOpener;

impl LinkOpener for BlockedOpener {
    fn open(&self, _url: &Url) -> Result<(), LinkOpenError> {
        Err(LinkOpenError::Blocked)
    }
}

/// Holds the completed-list write open until released, once armed.
#[derive(Default)]
struct GatedStore {
    inner: InMemoryStore,
    armed: AtomicBool,
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl KeyValueStore for GatedStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == COMPLETED_LESSONS_KEY && self.armed.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

fn ids(raw: &[u32]) -> BTreeSet<LessonId> {
    raw.iter().copied().map(LessonId::new).collect()
}

async fn store_on(kv: &InMemoryStore) -> ProgressStore {
    ProgressStore::initialize(Arc::new(kv.clone()), Arc::new(RecordingOpener::default())).await
}

#[tokio::test]
async fn initialize_without_data_yields_defaults() {
    let store = store_on(&InMemoryStore::new()).await;
    assert_eq!(store.snapshot(), Session::default());
}

#[tokio::test]
async fn initialize_restores_name_and_completed() {
    let kv = InMemoryStore::new();
    kv.set(STUDENT_NAME_KEY, "Asha").await.unwrap();
    kv.set(COMPLETED_LESSONS_KEY, "[1,3]").await.unwrap();

    let session = store_on(&kv).await.snapshot();
    assert_eq!(session.page(), Page::Landing);
    assert_eq!(session.student_name(), "Asha");
    assert_eq!(session.completed(), &ids(&[1, 3]));
}

#[tokio::test]
async fn initialize_with_corrupt_list_falls_back_to_empty() {
    let kv = InMemoryStore::new();
    kv.set(STUDENT_NAME_KEY, "Asha").await.unwrap();
    kv.set(COMPLETED_LESSONS_KEY, "not json at all").await.unwrap();

    let session = store_on(&kv).await.snapshot();
    assert_eq!(session.student_name(), "Asha");
    assert!(session.completed().is_empty());
}

#[tokio::test]
async fn initialize_with_unknown_schema_version_falls_back_to_empty() {
    let kv = InMemoryStore::new();
    kv.set(SCHEMA_VERSION_KEY, "2").await.unwrap();
    kv.set(COMPLETED_LESSONS_KEY, "[1]").await.unwrap();
    assert!(store_on(&kv).await.snapshot().completed().is_empty());
}

#[tokio::test]
async fn submit_name_moves_to_lessons_and_persists() {
    let kv = InMemoryStore::new();
    let store = store_on(&kv).await;

    let session = store.submit_name("Ravi").await;
    assert_eq!(session.page(), Page::Lessons);
    assert_eq!(session.student_name(), "Ravi");
    assert_eq!(kv.get(STUDENT_NAME_KEY).await.unwrap().as_deref(), Some("Ravi"));
    // Started with nothing completed: the empty list is recorded explicitly.
    assert_eq!(kv.get(COMPLETED_LESSONS_KEY).await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn duplicate_and_reordered_completions_form_a_set() {
    let kv = InMemoryStore::new();
    let store = store_on(&kv).await;
    for id in [4, 2, 4, 5, 2, 2] {
        store.complete_lesson(LessonId::new(id)).await;
    }
    assert_eq!(store.snapshot().completed(), &ids(&[2, 4, 5]));
}

#[tokio::test]
async fn completed_set_survives_reload() {
    let kv = InMemoryStore::new();
    let store = store_on(&kv).await;
    store.submit_name("Ravi").await;
    for id in [5, 2, 4] {
        store.complete_lesson(LessonId::new(id)).await;
    }
    drop(store);

    let reloaded = store_on(&kv).await.snapshot();
    assert_eq!(reloaded.completed(), &ids(&[2, 4, 5]));
    assert_eq!(reloaded.student_name(), "Ravi");
    assert_eq!(reloaded.page(), Page::Landing);
}

#[tokio::test]
async fn open_lesson_records_completion_then_opens() {
    let kv = InMemoryStore::new();
    let opener = Arc::new(RecordingOpener::default());
    let store = ProgressStore::initialize(Arc::new(kv.clone()), opener.clone()).await;
    let catalog = LessonCatalog::builtin().unwrap();
    let lesson = catalog.get(LessonId::new(3)).unwrap();

    let session = store.open_lesson_and_complete(lesson).await;
    assert!(session.is_completed(LessonId::new(3)));
    assert_eq!(
        opener.opened.lock().unwrap().as_slice(),
        [lesson.url().to_string()]
    );
    assert_eq!(kv.get(COMPLETED_LESSONS_KEY).await.unwrap().as_deref(), Some("[3]"));
}

#[tokio::test]
async fn blocked_open_still_records_completion() {
    let kv = InMemoryStore::new();
    let store = ProgressStore::initialize(Arc::new(kv.clone()), Arc::new(BlockedOpener)).await;
    let catalog = LessonCatalog::builtin().unwrap();
    let lesson = catalog.get(LessonId::new(1)).unwrap();

    let session = store.open_lesson_and_complete(lesson).await;
    assert!(session.is_completed(LessonId::new(1)));
    assert!(store.snapshot().is_completed(LessonId::new(1)));
    assert_eq!(kv.get(COMPLETED_LESSONS_KEY).await.unwrap().as_deref(), Some("[1]"));
}

#[tokio::test]
async fn go_to_certificate_only_changes_page() {
    let store = store_on(&InMemoryStore::new()).await;
    store.submit_name("Asha").await;
    store.complete_lesson(LessonId::new(2)).await;
    let before = store.snapshot();

    let after = store.go_to_certificate();
    assert_eq!(after.page(), Page::Certificate);
    assert_eq!(after.student_name(), before.student_name());
    assert_eq!(after.completed(), before.completed());
}

#[tokio::test]
async fn change_name_keeps_progress() {
    let store = store_on(&InMemoryStore::new()).await;
    store.submit_name("Asha").await;
    store.complete_lesson(LessonId::new(2)).await;

    let session = store.change_name();
    assert_eq!(session.page(), Page::Landing);
    assert_eq!(session.student_name(), "Asha");
    assert_eq!(session.completed(), &ids(&[2]));
    assert_eq!(store.go_to_lessons().page(), Page::Lessons);
}

#[tokio::test]
async fn start_over_clears_session_and_storage() {
    let kv = InMemoryStore::new();
    let store = store_on(&kv).await;
    store.submit_name("Asha").await;
    store.complete_lesson(LessonId::new(1)).await;
    store.go_to_certificate();

    let session = store.start_over().await;
    assert_eq!(session, Session::default());
    assert_eq!(kv.get(STUDENT_NAME_KEY).await.unwrap(), None);
    assert_eq!(kv.get(COMPLETED_LESSONS_KEY).await.unwrap(), None);
    assert_eq!(kv.len().unwrap(), 0);

    assert_eq!(store_on(&kv).await.snapshot(), Session::default());
}

// Ids are not checked against the catalog; the catalog just ignores strays.
#[tokio::test]
async fn unknown_lesson_ids_are_accepted() {
    let store = store_on(&InMemoryStore::new()).await;
    let session = store.complete_lesson(LessonId::new(42)).await;
    assert!(session.is_completed(LessonId::new(42)));

    let catalog = LessonCatalog::builtin().unwrap();
    assert_eq!(catalog.completed_count(session.completed()), 0);
}

#[tokio::test]
async fn app_services_initialize_from_storage() {
    let storage = Storage::in_memory();
    storage.kv.set(STUDENT_NAME_KEY, "Asha").await.unwrap();
    let dir = tempfile::tempdir().unwrap();

    let services = AppServices::from_storage(
        &storage,
        fixed_clock(),
        Arc::new(RecordingOpener::default()),
        dir.path().to_path_buf(),
    )
    .await
    .unwrap();

    assert_eq!(services.catalog().len(), 5);
    assert_eq!(services.progress().snapshot().student_name(), "Asha");
    let download = services.certificates().generate("Asha").await.unwrap();
    assert!(download.path.starts_with(dir.path()));
}

#[tokio::test]
async fn navigation_during_a_pending_write_is_not_undone() {
    let kv = Arc::new(GatedStore::default());
    let store = Arc::new(
        ProgressStore::initialize(kv.clone(), Arc::new(RecordingOpener::default())).await,
    );
    store.submit_name("Asha").await;
    for id in 1..=4 {
        store.complete_lesson(LessonId::new(id)).await;
    }

    kv.armed.store(true, Ordering::SeqCst);
    let pending = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.complete_lesson(LessonId::new(5)).await })
    };
    kv.entered.notified().await;

    let on_certificate = store.go_to_certificate();
    assert_eq!(on_certificate.page(), Page::Certificate);
    kv.release.notify_one();

    let returned = pending.await.unwrap();
    assert_eq!(returned.page(), Page::Certificate);
    assert_eq!(returned, store.snapshot());
    assert_eq!(returned.completed(), &ids(&[1, 2, 3, 4, 5]));
}

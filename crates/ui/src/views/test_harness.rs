use std::sync::Arc;

use course_core::model::LessonId;
use course_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{AppServices, LinkOpenError, LinkOpener};
use storage::repository::Storage;
use tempfile::TempDir;
use url::Url;

use crate::context::{UiApp, build_app_context};
use crate::views::Shell;

struct NoopOpener;

impl LinkOpener for NoopOpener {
    fn open(&self, _url: &Url) -> Result<(), LinkOpenError> {
        Ok(())
    }
}

/// Where the store is driven before the first render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fresh,
    Started { completed: u32 },
    Certificate,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<AppServices>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewShellHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Shell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: Arc<AppServices>,
    _downloads: TempDir,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub async fn setup_view_harness(stage: Stage, name: &str) -> ViewHarness {
    let downloads = tempfile::tempdir().expect("tempdir");
    let storage = Storage::in_memory();
    let app = AppServices::from_storage(
        &storage,
        fixed_clock(),
        Arc::new(NoopOpener),
        downloads.path().to_path_buf(),
    )
    .await
    .expect("services");

    let progress = app.progress();
    match stage {
        Stage::Fresh => {}
        Stage::Started { completed } => {
            progress.submit_name(name).await;
            for id in 1..=completed {
                progress.complete_lesson(LessonId::new(id)).await;
            }
        }
        Stage::Certificate => {
            progress.submit_name(name).await;
            for lesson in app.catalog().iter() {
                progress.complete_lesson(lesson.id()).await;
            }
            progress.go_to_certificate();
        }
    }

    let app = Arc::new(app);
    let dom = VirtualDom::new_with_props(
        ViewShellHarness,
        ViewHarnessProps {
            app: Arc::clone(&app),
        },
    );

    ViewHarness {
        dom,
        app,
        _downloads: downloads,
    }
}

use course_core::model::LessonId;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::components::{LessonCard, ProgressBar};
use crate::views::shell::use_session;
use crate::vm::{map_lesson_cards, map_progress};

#[component]
pub fn LessonsView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let mut session = use_session();

    let snapshot = session.read().clone();
    let progress_vm = map_progress(&catalog, snapshot.completed());
    let cards = map_lesson_cards(&catalog, snapshot.completed());
    let student_name = snapshot.student_name().to_string();

    let progress_for_open = progress.clone();
    let open_lesson = use_callback(move |id: LessonId| {
        let Some(lesson) = catalog.get(id).cloned() else {
            tracing::warn!(lesson = %id, "lesson missing from catalog");
            return;
        };
        let progress = progress_for_open.clone();
        spawn(async move {
            let next = progress.open_lesson_and_complete(&lesson).await;
            session.set(next);
        });
    });

    let progress_for_nav = progress.clone();

    rsx! {
        div { class: "page lessons-page",
            header { class: "lessons-header",
                div {
                    h1 { class: "view-title", "Welcome back, {student_name}!" }
                    p { class: "view-subtitle", "Continue your AI prompting journey" }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| session.set(progress.change_name()),
                    "Change Name"
                }
            }

            ProgressBar { progress: progress_vm.clone() }

            div { class: "progress-stats",
                div { class: "progress-stat",
                    strong { "{progress_vm.completed}" }
                    span { "Completed" }
                }
                div { class: "progress-stat",
                    strong { "{progress_vm.remaining}" }
                    span { "Remaining" }
                }
                div { class: "progress-stat",
                    strong { "{progress_vm.percent}%" }
                    span { "Progress" }
                }
            }

            if progress_vm.all_done {
                div { class: "completion-banner",
                    h2 { "Congratulations!" }
                    p { "You've completed all lessons!" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| session.set(progress_for_nav.go_to_certificate()),
                        "Get Your Certificate"
                    }
                }
            }

            section { class: "lesson-grid",
                for card in cards {
                    LessonCard { key: "{card.id}", card: card.clone(), on_open: open_lesson }
                }
            }
        }
    }
}

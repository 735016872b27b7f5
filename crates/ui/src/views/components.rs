use course_core::model::LessonId;
use dioxus::prelude::*;

use crate::vm::{LessonCardVm, ProgressVm};

#[component]
pub fn ProgressBar(progress: ProgressVm) -> Element {
    let style = progress.bar_style();
    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { class: "progress-fill", style: "{style}" }
            }
            div { class: "progress-label",
                span { "{progress.summary_label()}" }
                span { "{progress.percent}%" }
            }
        }
    }
}

#[component]
pub fn LessonCard(card: LessonCardVm, on_open: EventHandler<LessonId>) -> Element {
    let mut show_prompt = use_signal(|| false);
    let lesson_id = card.id;
    let prompt_toggle = if show_prompt() { "Hide Prompt" } else { "Preview Prompt" };

    rsx! {
        article { class: card.card_class(),
            header { class: "lesson-card-header",
                span { class: "lesson-number", "Lesson {card.number}" }
                h3 { "{card.title}" }
                div { class: "lesson-tags",
                    span { class: "tag", "{card.category}" }
                    span { class: card.difficulty_class, "{card.difficulty}" }
                }
                if card.completed {
                    span { class: "lesson-badge", "Completed" }
                }
            }

            if !card.skills.is_empty() {
                div { class: "lesson-tags lesson-skills",
                    for skill in card.skills.iter() {
                        span { key: "{skill}", class: "tag", "{skill}" }
                    }
                }
            }

            p { class: "lesson-description", "{card.description}" }

            button {
                class: "btn btn-link",
                r#type: "button",
                onclick: move |_| show_prompt.toggle(),
                "{prompt_toggle}"
            }
            if show_prompt() {
                p { class: "lesson-prompt", "\"{card.prompt}\"" }
            }

            footer { class: "lesson-card-footer",
                span { class: "lesson-duration", "{card.duration}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_open.call(lesson_id),
                    "{card.action_label()}"
                }
            }
        }
    }
}

use course_core::model::normalize_student_name;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::shell::use_session;

#[component]
pub fn LandingView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let lesson_count = ctx.catalog().len();
    let mut session = use_session();
    let mut input = use_signal(|| session.peek().student_name().to_string());

    let can_submit = normalize_student_name(&input.read()).is_some();

    rsx! {
        div { class: "page landing-page",
            header { class: "view-header",
                h1 { class: "view-title", "AI Prompting Mastery" }
                p { class: "view-subtitle",
                    "Hands-on prompting exercises with real scenarios, finished with a certificate."
                }
            }

            section { class: "landing-features",
                div { class: "landing-feature",
                    h3 { "{lesson_count} Interactive Lessons" }
                    p { "Hands-on prompting exercises with real scenarios" }
                }
                div { class: "landing-feature",
                    h3 { "Practical Skills" }
                    p { "Learn prompting techniques you can use immediately" }
                }
                div { class: "landing-feature",
                    h3 { "Real Scenarios" }
                    p { "Creative, planning, and analytical prompting challenges" }
                }
                div { class: "landing-feature",
                    h3 { "Certificate" }
                    p { "Earn a certificate upon course completion" }
                }
            }

            h2 { "Start Your Journey" }
            form {
                class: "landing-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let Some(name) = normalize_student_name(&input.read()) else {
                        return;
                    };
                    let progress = progress.clone();
                    spawn(async move {
                        let next = progress.submit_name(&name).await;
                        session.set(next);
                    });
                },
                input {
                    r#type: "text",
                    name: "student-name",
                    placeholder: "Enter your full name",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    "Begin Learning"
                }
            }
        }
    }
}

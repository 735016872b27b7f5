use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::shell::use_session;
use crate::views::state::DownloadState;
use crate::vm::CertificateVm;

#[component]
pub fn CertificateView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let certificates = ctx.certificates();
    let mut session = use_session();
    let mut download = use_signal(|| DownloadState::Idle);

    let student_name = session.read().student_name().to_string();
    let download_dir = certificates.download_dir().display().to_string();
    let details = certificates
        .fields_for(&student_name)
        .map(|fields| CertificateVm::from(&fields));

    let on_download = {
        let certificates = certificates.clone();
        let student_name = student_name.clone();
        move |_: MouseEvent| {
            if download.peek().is_working() {
                return;
            }
            download.set(DownloadState::Working);
            let certificates = certificates.clone();
            let student_name = student_name.clone();
            spawn(async move {
                let result = certificates.generate(&student_name).await;
                if let Err(err) = &result {
                    tracing::error!(error = %err, "certificate generation failed");
                }
                download.set(DownloadState::from_result(&result));
            });
        }
    };

    let progress_for_review = progress.clone();
    let on_start_over = move |_: MouseEvent| {
        let progress = progress.clone();
        spawn(async move {
            let next = progress.start_over().await;
            session.set(next);
        });
    };

    let notice = match download() {
        DownloadState::Idle => rsx! {},
        DownloadState::Working => rsx! {
            p { class: "notice", "Generating certificate..." }
        },
        DownloadState::Saved(path) => rsx! {
            p { class: "notice notice--ok", "Certificate saved to {path}" }
        },
        DownloadState::Failed(message) => rsx! {
            p { class: "notice notice--error", "Error generating certificate: {message}" }
        },
    };

    rsx! {
        div { class: "page certificate-page",
            header { class: "view-header",
                h1 { class: "view-title", "Certificate Ready!" }
                p { class: "view-subtitle",
                    "You've completed every lesson. Download your certificate below."
                }
                p { class: "view-hint", "Certificates are saved to {download_dir}" }
            }

            match details {
                Ok(vm) => rsx! {
                    dl { class: "certificate-details",
                        dt { "Student Name" }
                        dd { "{vm.student_name}" }
                        dt { "Course" }
                        dd { "{vm.course}" }
                        dt { "Instructor" }
                        dd { "{vm.instructor}" }
                        dt { "Institution" }
                        dd { "{vm.institution}" }
                        dt { "Date" }
                        dd { "{vm.issued_on}" }
                    }
                },
                Err(err) => rsx! {
                    p { class: "notice notice--error", "{err}" }
                },
            }

            div { class: "certificate-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: download.read().is_working(),
                    onclick: on_download,
                    "Download Certificate"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| session.set(progress_for_review.go_to_lessons()),
                    "Review Lessons"
                }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: on_start_over,
                    "Start Over"
                }
            }

            {notice}
        }
    }
}

use course_core::model::{Page, Session};
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{CertificateView, LandingView, LessonsView};

/// Renders the page named by the session and shares the session signal with it.
#[component]
pub fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context_provider(|| Signal::new(ctx.progress().snapshot()));
    let page = session.read().page();
    tracing::debug!(page = page.name(), "rendering page");

    match page {
        Page::Landing => rsx! { LandingView {} },
        Page::Lessons => rsx! { LessonsView {} },
        Page::Certificate => rsx! { CertificateView {} },
    }
}

/// The shared session snapshot. Pages replace it with whatever the store returns.
pub(crate) fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

use course_core::model::Page;

use super::test_harness::{Stage, setup_view_harness};

#[tokio::test]
async fn landing_renders_for_a_fresh_session() {
    let mut harness = setup_view_harness(Stage::Fresh, "").await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("AI Prompting Mastery"));
    assert!(html.contains("5 Interactive Lessons"));
    assert!(html.contains("Start Your Journey"));
    assert!(html.contains("Begin Learning"));
}

#[tokio::test]
async fn lessons_page_shows_greeting_and_progress() {
    let mut harness = setup_view_harness(Stage::Started { completed: 2 }, "Asha").await;
    assert_eq!(harness.app.progress().snapshot().page(), Page::Lessons);

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Welcome back, Asha!"));
    assert!(html.contains("2 of 5 lessons completed"));
    assert!(html.contains("width: 40%;"));
    assert!(html.contains("Review Lesson"));
    assert!(html.contains("Start Lesson"));
    assert!(!html.contains("Get Your Certificate"));
}

#[tokio::test]
async fn lessons_page_offers_certificate_once_everything_is_done() {
    let mut harness = setup_view_harness(Stage::Started { completed: 5 }, "Asha").await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Congratulations!"));
    assert!(html.contains("Get Your Certificate"));
    assert!(!html.contains("Start Lesson"));
}

#[tokio::test]
async fn certificate_page_lists_fields() {
    let mut harness = setup_view_harness(Stage::Certificate, "Asha Rao").await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Certificate Ready!"));
    assert!(html.contains("Asha Rao"));
    assert!(html.contains("AI Prompting"));
    assert!(html.contains("Rahul Jadhav"));
    assert!(html.contains("VPPCOE"));
    assert!(html.contains("14/11/2023"));
    assert!(html.contains("Download Certificate"));
}

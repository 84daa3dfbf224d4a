mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use common::{fake_teacher, test_state};
use edudash::modules::public_route::{NavigationContext, PublicRoute};
use edudash::modules::screens::FeatureScreen;
use edudash::modules::screens::feedback_form::FeedbackSubmission;
use edudash::{App, Frame};
use edudash_models::{FeedbackFormConfig, FormId, FormStatus, UserId, ViewId};
use edudash_store::{MemoryStore, RecordStore};

async fn store_with_form(id: &str) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::with_current_user(fake_teacher()));
    store
        .save_feedback_form(FeedbackFormConfig {
            id: id.into(),
            teacher_id: UserId::new(),
            class_id: "10A".into(),
            lesson_topic: "Photosynthesis".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            url: FeedbackFormConfig::public_link("https://school.example/", &id.into()),
            status: FormStatus::Active,
        })
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_public_route_renders_without_session_lookup() {
    let store = store_with_form("abc123").await;
    let mut app = App::new(
        test_state(store.clone()),
        NavigationContext::parse("?view=feedback&id=abc123"),
    );

    let expected = Frame::PublicFeedback {
        form_id: FormId::new("abc123"),
    };
    assert_eq!(app.frame(), expected);
    assert_eq!(app.boot().await, expected);

    assert_eq!(store.current_user_calls(), 0);
    assert!(!store.is_initialized());
    assert!(!app.session().is_authenticated());
    assert_eq!(app.view_state().current_view(), ViewId::Dashboard);
}

#[tokio::test]
async fn test_public_form_renders_and_accepts_feedback() {
    let store = store_with_form("abc123").await;
    let mut app = App::new(
        test_state(store.clone()),
        NavigationContext::parse("https://school.example/?view=feedback&id=abc123"),
    );
    app.boot().await;

    let screen = app.public_form().unwrap();
    let lines = screen.render(&app.screen_context()).await.unwrap();
    assert!(lines[0].starts_with("Photosynthesis"));

    let submission = FeedbackSubmission {
        interest: 5,
        clarity: 5,
        productivity: 4,
        efficiency: 4,
        improve: String::new(),
        liked: "Experiments".to_string(),
    };
    screen.submit(store.as_ref(), submission).await.unwrap();
    assert_eq!(store.feedback_responses(&"abc123".into()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_closing_form_enters_normal_flow() {
    let store = store_with_form("abc123").await;
    let mut app = App::new(
        test_state(store.clone()),
        NavigationContext::parse("?view=feedback&id=abc123"),
    );
    app.boot().await;

    let frame = app.close_public_form().await;
    assert!(matches!(frame, Frame::Shell(_)));
    assert!(app.context().is_empty());
    assert!(app.public_route().is_none());
    assert_eq!(app.view_state().current_view(), ViewId::TeacherProfile);
    assert_eq!(store.current_user_calls(), 1);
}

#[tokio::test]
async fn test_incomplete_public_route_falls_through() {
    for query in ["?view=feedback", "?view=feedback&id=", "?id=abc123", "?view=grades&id=abc123"] {
        let store = Arc::new(MemoryStore::new());
        let mut app = App::new(test_state(store.clone()), NavigationContext::parse(query));
        assert_eq!(app.frame(), Frame::Loading, "{query}");
        assert_eq!(app.boot().await, Frame::Auth, "{query}");
        assert_eq!(store.current_user_calls(), 1, "{query}");
    }
}

#[test]
fn test_detect_reads_request_fields() {
    let ctx = NavigationContext::parse("?view=feedback&id=abc123&utm=mail");
    let request = ctx.request();
    assert_eq!(request.view.as_deref(), Some("feedback"));
    assert_eq!(request.id.as_deref(), Some("abc123"));
    assert_eq!(
        PublicRoute::detect(&ctx),
        Some(PublicRoute::FeedbackForm {
            form_id: "abc123".into()
        })
    );
}

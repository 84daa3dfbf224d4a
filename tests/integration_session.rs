mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{TEST_PASSWORD, fake_student, fake_teacher, register, test_state};
use edudash::modules::auth::LoginRequest;
use edudash::state::{AppConfig, AppState};
use edudash_config::{ShellConfig, StorageConfig};
use edudash_core::hash_password;
use edudash::modules::navigation::NavigationError;
use edudash::modules::public_route::NavigationContext;
use edudash::modules::screens::{ScreenSelector, StudentScreen, TeacherScreen};
use edudash::modules::session::Session;
use edudash::{App, Frame};
use edudash_core::ErrorKind;
use edudash_models::ViewId;
use edudash_store::{FileStore, IdentityStore, MemoryStore, UserRecord};

fn app_over(store: &Arc<MemoryStore>) -> App {
    App::new(test_state(store.clone()), NavigationContext::default())
}

fn shell_content(frame: &Frame) -> ScreenSelector {
    match frame {
        Frame::Shell(shell) => shell.content,
        other => panic!("expected shell frame, got {other:?}"),
    }
}

#[tokio::test]
async fn test_persisted_teacher_lands_on_profile() {
    let teacher = fake_teacher();
    let store = Arc::new(MemoryStore::with_current_user(teacher.clone()));
    let mut app = app_over(&store);

    assert_eq!(app.frame(), Frame::Loading);

    let frame = app.boot().await;
    assert_eq!(shell_content(&frame), ScreenSelector::Teacher(TeacherScreen::Profile));
    assert_eq!(app.view_state().current_view(), ViewId::TeacherProfile);
    assert_eq!(app.session(), &Session::Authenticated(teacher));
    assert_eq!(store.current_user_calls(), 1);
}

#[tokio::test]
async fn test_no_identity_shows_auth_then_login_lands_on_dashboard() {
    let store = Arc::new(MemoryStore::new());
    let mut app = app_over(&store);

    assert_eq!(app.boot().await, Frame::Auth);
    assert!(!app.session().is_authenticated());

    let frame = app.login(fake_student());
    assert_eq!(shell_content(&frame), ScreenSelector::Student(StudentScreen::Dashboard));
    assert_eq!(app.view_state().current_view(), ViewId::Dashboard);
}

#[tokio::test]
async fn test_store_fault_at_startup_shows_auth() {
    let store = Arc::new(MemoryStore::with_current_user(fake_student()));
    store.fail_reads(true);
    let mut app = app_over(&store);

    assert_eq!(app.boot().await, Frame::Auth);
    assert_eq!(app.session(), &Session::Anonymous);
}

#[tokio::test]
async fn test_logout_clears_session_even_when_store_fails() {
    let store = Arc::new(MemoryStore::with_current_user(fake_teacher()));
    let mut app = app_over(&store);
    app.boot().await;

    store.fail_logout(true);
    assert_eq!(app.logout().await, Frame::Auth);
    assert!(!app.session().is_authenticated());
    assert!(app.session().user().is_none());
    assert_eq!(store.logout_calls(), 1);
}

#[tokio::test]
async fn test_sign_in_persists_identity_across_restart() {
    let store = Arc::new(MemoryStore::new());
    let student = fake_student();
    register(&store, &student).await;

    let mut app = app_over(&store);
    app.boot().await;
    let frame = app
        .sign_in(LoginRequest::new(student.email.as_str(), TEST_PASSWORD))
        .await
        .unwrap();
    assert!(matches!(frame, Frame::Shell(_)));

    let mut restarted = app_over(&store);
    restarted.boot().await;
    assert_eq!(restarted.session(), &Session::Authenticated(student));
}

#[tokio::test]
async fn test_file_store_session_survives_restart_until_logout() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        shell: ShellConfig::instant(),
        storage: StorageConfig {
            data_dir: dir.path().to_path_buf(),
        },
        ..AppConfig::default()
    };
    let teacher = fake_teacher();
    let directory = FileStore::new(&config.storage, config.session.clone());
    directory.initialize_database().await.unwrap();
    directory
        .upsert_user(UserRecord {
            user: teacher.clone(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
        })
        .await
        .unwrap();

    let mut app = App::new(AppState::from_config(config.clone()), NavigationContext::default());
    assert_eq!(app.boot().await, Frame::Auth);
    app.sign_in(LoginRequest::new(teacher.email.as_str(), TEST_PASSWORD))
        .await
        .unwrap();

    let mut restarted = App::new(AppState::from_config(config.clone()), NavigationContext::default());
    let frame = restarted.boot().await;
    assert_eq!(shell_content(&frame), ScreenSelector::Teacher(TeacherScreen::Profile));
    assert_eq!(restarted.logout().await, Frame::Auth);

    let mut after_logout = App::new(AppState::from_config(config), NavigationContext::default());
    assert_eq!(after_logout.boot().await, Frame::Auth);
}

#[tokio::test]
async fn test_sign_in_with_wrong_password_stays_signed_out() {
    let store = Arc::new(MemoryStore::new());
    let student = fake_student();
    register(&store, &student).await;

    let mut app = app_over(&store);
    app.boot().await;
    let err = app
        .sign_in(LoginRequest::new(student.email.as_str(), "wrong-password"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert_eq!(app.frame(), Frame::Auth);
}

#[tokio::test]
async fn test_relogin_ignores_previous_view() {
    let store = Arc::new(MemoryStore::new());
    let mut app = app_over(&store);
    app.boot().await;

    let student = fake_student();
    app.login(student.clone());
    app.navigate(ViewId::Goals).unwrap();
    app.logout().await;
    assert_eq!(app.view_state().current_view(), ViewId::Goals);

    app.login(student);
    assert_eq!(app.view_state().current_view(), ViewId::Dashboard);
}

#[tokio::test]
async fn test_student_navigation_and_out_of_role_fallback() {
    let store = Arc::new(MemoryStore::with_current_user(fake_student()));
    let mut app = app_over(&store);
    app.boot().await;

    app.navigate(ViewId::Grades).unwrap();
    app.tick(Duration::ZERO);
    assert_eq!(shell_content(&app.frame()), ScreenSelector::Student(StudentScreen::Grades));

    app.navigate(ViewId::TeacherGrades).unwrap();
    app.tick(Duration::ZERO);
    assert_eq!(app.view_state().current_view(), ViewId::TeacherGrades);
    assert_eq!(
        shell_content(&app.frame()),
        ScreenSelector::Student(StudentScreen::Dashboard)
    );
    assert_eq!(app.current_screen(), ScreenSelector::Student(StudentScreen::Dashboard));
}

#[tokio::test]
async fn test_navigate_while_signed_out_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let mut app = app_over(&store);
    app.boot().await;

    let err = app.navigate(ViewId::Grades).unwrap_err();
    assert_eq!(err, NavigationError::NotAuthenticated(ViewId::Grades));
    assert_eq!(app.frame(), Frame::Auth);
}

#[tokio::test]
async fn test_double_toggle_restores_sidebar_and_keeps_view() {
    let store = Arc::new(MemoryStore::with_current_user(fake_teacher()));
    let mut app = app_over(&store);
    app.boot().await;
    app.tick(Duration::ZERO);
    let before = app.frame();

    assert!(!app.toggle_sidebar());
    match app.frame() {
        Frame::Shell(shell) => {
            assert!(shell.sidebar.is_none());
            assert_eq!(shell.content, ScreenSelector::Teacher(TeacherScreen::Profile));
        }
        other => panic!("expected shell frame, got {other:?}"),
    }

    assert!(app.toggle_sidebar());
    assert_eq!(app.frame(), before);
}

#[test]
fn test_boot_from_sync_context() {
    let store = Arc::new(MemoryStore::with_current_user(fake_student()));
    let mut app = app_over(&store);
    let frame = tokio_test::block_on(app.boot());
    assert_eq!(shell_content(&frame), ScreenSelector::Student(StudentScreen::Dashboard));
}

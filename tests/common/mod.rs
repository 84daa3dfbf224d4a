use std::sync::Arc;

use edudash::state::{AppConfig, AppState};
use edudash_config::ShellConfig;
use edudash_core::hash_password;
use edudash_models::{ClassId, Email, User};
use edudash_store::{IdentityStore, MemoryStore, UserRecord};
use fake::Fake;
use fake::faker::name::en::Name;
use uuid::Uuid;

#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "testpass123";

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@school.example", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn fake_student() -> User {
    let name: String = Name().fake();
    User::student(
        name,
        Email::new(generate_unique_email()).unwrap(),
        Some(ClassId::new("10A")),
    )
}

#[allow(dead_code)]
pub fn fake_teacher() -> User {
    let name: String = Name().fake();
    User::teacher(
        name,
        Email::new(generate_unique_email()).unwrap(),
        vec!["Mathematics".to_string()],
        vec![ClassId::new("10A")],
    )
}

/// App state over `store` with transitions that finish on a zero-length tick.
#[allow(dead_code)]
pub fn test_state(store: Arc<MemoryStore>) -> AppState {
    let config = AppConfig {
        shell: ShellConfig::instant(),
        ..AppConfig::default()
    };
    AppState::with_store(config, store)
}

/// Adds `user` to the directory with [`TEST_PASSWORD`].
#[allow(dead_code)]
pub async fn register(store: &MemoryStore, user: &User) {
    store
        .upsert_user(UserRecord {
            user: user.clone(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
        })
        .await
        .unwrap();
}

use edudash_auth::{AuthError, create_session_token, verify_session_token};
use edudash_config::SessionConfig;
use edudash_models::{ClassId, Email, Role, User};

fn get_test_session_config() -> SessionConfig {
    SessionConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_ttl_seconds: 3600,
    }
}

fn teacher() -> User {
    User::teacher(
        "Grace Hopper",
        Email::new("grace@school.example").unwrap(),
        vec!["Computer Science".to_string()],
        vec![ClassId::new("11B"), ClassId::new("12A")],
    )
}

#[test]
fn test_create_session_token_success() {
    let token = create_session_token(&teacher(), &get_test_session_config()).unwrap();
    assert!(!token.is_empty());
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_create_session_token_all_roles() {
    let config = get_test_session_config();
    let student = User::student("Ada", Email::new("ada@school.example").unwrap(), None);
    for user in [student, teacher()] {
        let token = create_session_token(&user, &config).unwrap();
        let claims = verify_session_token(&token, &config).unwrap();
        assert!(Role::ALL.contains(&claims.role));
        assert_eq!(claims.role, user.role);
    }
}

#[test]
fn test_verify_session_token_success() {
    let config = get_test_session_config();
    let user = teacher();
    let token = create_session_token(&user, &config).unwrap();

    let claims = verify_session_token(&token, &config).unwrap();
    assert_eq!(claims.email, user.email.as_str());
    assert_eq!(claims.sub, user.id.to_string());
    assert_eq!(claims.into_user().unwrap(), user);
}

#[test]
fn test_verify_session_token_invalid() {
    let result = verify_session_token("invalid.token.here", &get_test_session_config());
    assert!(matches!(result, Err(AuthError::Token(_))));
}

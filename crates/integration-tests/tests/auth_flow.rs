//! Signup and login flow tests against an in-memory `SQLite` database.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use bazaar_web::db;
use bazaar_web::services::auth::{AuthError, AuthService};

/// Create a fresh in-memory database with the credential schema applied.
async fn test_pool() -> SqlitePool {
    // A single connection keeps the in-memory database alive for the test.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    db::ensure_schema(&pool)
        .await
        .expect("Failed to apply schema");
    pool
}

// ============================================================================
// Signup
// ============================================================================

#[tokio::test]
async fn test_register_then_login() {
    let pool = test_pool().await;
    let auth = AuthService::new(&pool);

    let created = auth
        .register("alice", "correct horse battery")
        .await
        .expect("Signup failed");
    assert_eq!(created.username, "alice");

    let logged_in = auth
        .login("alice", "correct horse battery")
        .await
        .expect("Login failed");
    assert_eq!(logged_in.id, created.id);
}

#[tokio::test]
async fn test_register_duplicate_username_is_rejected() {
    let pool = test_pool().await;
    let auth = AuthService::new(&pool);

    auth.register("bob", "password123")
        .await
        .expect("First signup failed");

    let err = auth
        .register("bob", "different-password")
        .await
        .expect_err("Duplicate signup should fail");
    assert!(matches!(err, AuthError::UserAlreadyExists));
}

#[tokio::test]
async fn test_register_short_password_is_rejected() {
    let pool = test_pool().await;
    let auth = AuthService::new(&pool);

    let err = auth
        .register("carol", "short")
        .await
        .expect_err("Short password should fail");
    assert!(matches!(err, AuthError::WeakPassword(_)));
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_wrong_password_is_invalid_credentials() {
    let pool = test_pool().await;
    let auth = AuthService::new(&pool);

    auth.register("dave", "password123")
        .await
        .expect("Signup failed");

    let err = auth
        .login("dave", "password124")
        .await
        .expect_err("Wrong password should fail");
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_user_is_invalid_credentials() {
    let pool = test_pool().await;
    let auth = AuthService::new(&pool);

    let err = auth
        .login("nobody", "password123")
        .await
        .expect_err("Unknown user should fail");
    assert!(matches!(err, AuthError::InvalidCredentials));
}

//! Authentication route handlers.
//!
//! Login, signup and logout. Outcomes are reported back to the pages as
//! `?error=` / `?success=` query codes carried through redirects.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Form and Query Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Map a redirect message code to user-facing text.
fn message_text(code: &str) -> &'static str {
    match code {
        "credentials" => "Invalid username or password.",
        "username_taken" => "That username is already taken.",
        "username_invalid" => "Usernames must be non-empty and at most 64 characters.",
        "password_mismatch" => "Passwords do not match.",
        "password_too_short" => "Passwords must be at least 8 characters.",
        "session" => "Could not start a session. Please try again.",
        "registered" => "Signup successful! Please log in.",
        "logged_out" => "Logged out successfully.",
        _ => "Something went wrong. Please try again.",
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<&'static str>,
    pub success: Option<&'static str>,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<&'static str>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error.as_deref().map(message_text),
        success: query.success.as_deref().map(message_text),
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let auth = AuthService::new(state.pool());

    match auth.login(&form.username, &form.password).await {
        Ok(user) => {
            if let Err(e) = set_current_user(&session, &CurrentUser::from(&user)).await {
                tracing::error!(error = %e, "failed to set session");
                return Ok(Redirect::to("/auth/login?error=session").into_response());
            }
            Ok(Redirect::to("/").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(username = %form.username, "login failed");
            Ok(Redirect::to("/auth/login?error=credentials").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
pub async fn register_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    RegisterTemplate {
        error: query.error.as_deref().map(message_text),
    }
}

/// Handle signup form submission.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    if form.password != form.password_confirm {
        return Ok(Redirect::to("/auth/register?error=password_mismatch").into_response());
    }

    let auth = AuthService::new(state.pool());

    match auth.register(&form.username, &form.password).await {
        Ok(_) => Ok(Redirect::to("/auth/login?success=registered").into_response()),
        Err(AuthError::UserAlreadyExists) => {
            Ok(Redirect::to("/auth/register?error=username_taken").into_response())
        }
        Err(AuthError::InvalidUsername(_)) => {
            Ok(Redirect::to("/auth/register?error=username_invalid").into_response())
        }
        Err(AuthError::WeakPassword(_)) => {
            Ok(Redirect::to("/auth/register?error=password_too_short").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout: clear the user and destroy the session.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!(error = %e, "failed to clear session");
    }
    if let Err(e) = session.flush().await {
        tracing::error!(error = %e, "failed to flush session");
    }

    Redirect::to("/auth/login?success=logged_out").into_response()
}

//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Home page: top-rated products (login required)
//! GET  /health             - Liveness check
//! GET  /health/ready       - Readiness check (database ping)
//!
//! # Products
//! GET  /products/{id}      - Product detail + similar products (login required)
//!
//! # Auth
//! GET  /auth/login         - Login page
//! POST /auth/login         - Login action
//! GET  /auth/register      - Signup page
//! POST /auth/register      - Signup action
//! POST /auth/logout        - Logout action
//! ```

pub mod auth;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/{id}", get(products::show))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/products", product_routes())
        .nest("/auth", auth_routes())
}

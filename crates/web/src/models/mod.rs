//! Domain and session types for the web layer.

pub mod session;
pub mod user;

pub use session::{CurrentUser, keys as session_keys};
pub use user::{User, UserId};

//! Session-stored types.

use serde::{Deserialize, Serialize};

use crate::models::user::{User, UserId};

/// Minimal identity stored in the session for the logged-in user.
///
/// Created on successful login, destroyed on logout or cookie expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's login name.
    pub username: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

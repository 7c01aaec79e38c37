// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{GUEST_AVATAR, GUEST_NAME};

/// A player identity, as stored under the profiles key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name. Unique across profiles, compared case-insensitively.
    pub name: String,

    /// Argon2 hash of the PIN.
    pub pin_hash: String,

    pub avatar: String,

    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Set only on the built-in guest identity, which is never persisted.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_guest: bool,
}

impl UserProfile {
    /// The fixed identity used when the user skips login.
    pub fn guest() -> Self {
        Self {
            name: GUEST_NAME.to_string(),
            pin_hash: String::new(),
            avatar: GUEST_AVATAR.to_string(),
            created_at: None,
            is_guest: true,
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Login form input.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Please enter your name."))]
    pub name: String,
    #[validate(length(min = 4, message = "Please enter a PIN of at least 4 characters."))]
    pub pin: String,
    /// Only required when the name has no profile yet.
    pub avatar: Option<String>,
}

impl LoginRequest {
    /// Trims surrounding whitespace the way the login form does.
    pub fn new(name: &str, pin: &str, avatar: Option<&str>) -> Self {
        Self {
            name: name.trim().to_string(),
            pin: pin.trim().to_string(),
            avatar: avatar
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string),
        }
    }
}

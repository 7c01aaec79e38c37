// src/profile.rs

//! Player identities, the last-used login name and the theme preference.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, UserProfile},
    storage::{KeyValueStore, read_json, write_json},
    utils::{
        html::clean_name,
        pin::{hash_pin, pin_matches},
    },
};

pub const PROFILES_KEY: &str = "quizUsers";
pub const LAST_USER_KEY: &str = "quizCurrentUserName";
pub const THEME_KEY: &str = "quizTheme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// First validation message, checking the name before the PIN.
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let fields = errors.field_errors();
    ["name", "pin"]
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// The fixed identity used when the user skips login. Never persisted.
pub fn guest_profile() -> UserProfile {
    UserProfile::guest()
}

pub struct ProfileStore<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
}

impl<'s, S: KeyValueStore + ?Sized> ProfileStore<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    /// All stored profiles, for lookups. An unreadable profile list is
    /// treated as empty.
    pub fn profiles(&self) -> AppResult<Vec<UserProfile>> {
        match self.stored_profiles() {
            Ok(profiles) => Ok(profiles),
            Err(e) => {
                tracing::warn!("Ignoring unreadable profile list: {}", e);
                Ok(Vec::new())
            }
        }
    }

    // Strict read: anything that may be written back must come from here.
    fn stored_profiles(&self) -> AppResult<Vec<UserProfile>> {
        Ok(read_json::<Vec<UserProfile>, _>(&*self.store, PROFILES_KEY)?.unwrap_or_default())
    }

    pub fn find(&self, name: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles()?.into_iter().find(|p| p.has_name(name)))
    }

    /// Signs in an existing profile or creates a new one.
    ///
    /// Existing names (compared case-insensitively) must present the same
    /// PIN. New names must come with an avatar. An unreadable profile list
    /// is a `StorageError` and is left untouched.
    pub fn login(&mut self, name: &str, pin: &str, avatar: Option<&str>) -> AppResult<UserProfile> {
        let request = LoginRequest::new(name, pin, avatar);

        if let Err(validation_errors) = request.validate() {
            return Err(AppError::InvalidInput(validation_message(&validation_errors)));
        }

        let name = clean_name(&request.name);
        if name.is_empty() {
            return Err(AppError::InvalidInput("Please enter your name.".to_string()));
        }

        let mut profiles = self.stored_profiles()?;

        let existing = profiles.iter().find(|p| p.has_name(&name)).cloned();

        let profile = match existing {
            Some(existing) => {
                if !pin_matches(&request.pin, &existing.pin_hash)? {
                    tracing::info!("Rejected login for {}: wrong PIN", existing.name);
                    return Err(AppError::AuthError(
                        "Incorrect PIN for this user.".to_string(),
                    ));
                }
                existing
            }
            None => {
                let avatar = request.avatar.ok_or_else(|| {
                    AppError::InvalidInput(
                        "Please select an avatar for your new profile.".to_string(),
                    )
                })?;

                let profile = UserProfile {
                    name,
                    pin_hash: hash_pin(&request.pin)?,
                    avatar,
                    created_at: Some(chrono::Utc::now()),
                    is_guest: false,
                };
                profiles.push(profile.clone());
                write_json(&mut *self.store, PROFILES_KEY, &profiles)?;
                tracing::info!("Created profile for {}", profile.name);
                profile
            }
        };

        self.remember_name(&profile.name);
        Ok(profile)
    }

    // Best effort: a failed write is logged, never returned.
    fn remember_name(&mut self, name: &str) {
        if let Err(e) = self.store.set(LAST_USER_KEY, name) {
            tracing::warn!("Could not remember last user name: {}", e);
        }
    }

    /// Name of the last successful login, for pre-filling the login prompt.
    pub fn last_used_name(&self) -> AppResult<Option<String>> {
        self.store.get(LAST_USER_KEY)
    }

    pub fn theme(&self) -> AppResult<Theme> {
        let theme = match self.store.get(THEME_KEY)?.as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        };
        Ok(theme)
    }

    pub fn set_theme(&mut self, theme: Theme) -> AppResult<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn toggle_theme(&mut self) -> AppResult<Theme> {
        let theme = self.theme()?.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }
}

//! Dark mode and greeting-name preferences.
//!
//! These live in the same store as the ledger, under their own keys.
//! Preference writes are best-effort from the user's point of view, but
//! failures are still returned so callers can log them.

use crate::store::{KeyValueStore, StoreError};

pub const DARK_MODE_KEY: &str = "darkMode";
pub const USERNAME_KEY: &str = "username";

/// Stored dark mode preference. The value is JSON, so only a literal
/// `true` turns it on; a missing or malformed entry reads as off.
pub fn dark_mode<S: KeyValueStore>(store: &S) -> bool {
    store
        .get(DARK_MODE_KEY)
        .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
        .unwrap_or(false)
}

/// Persist the dark mode preference.
///
/// # Errors
///
/// Returns [`StoreError`] if the write fails.
pub fn set_dark_mode<S: KeyValueStore>(store: &S, enabled: bool) -> Result<(), StoreError> {
    store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
}

/// Flip the stored preference and return the new value.
///
/// # Errors
///
/// Returns [`StoreError`] if the write fails.
pub fn toggle_dark_mode<S: KeyValueStore>(store: &S) -> Result<bool, StoreError> {
    let next = !dark_mode(store);
    set_dark_mode(store, next)?;
    Ok(next)
}

/// Stored greeting name; blank entries count as unset.
pub fn username<S: KeyValueStore>(store: &S) -> Option<String> {
    store
        .get(USERNAME_KEY)
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
}

/// # Errors
///
/// Returns [`StoreError`] if the write fails.
pub fn set_username<S: KeyValueStore>(store: &S, name: &str) -> Result<(), StoreError> {
    store.set(USERNAME_KEY, name.trim())
}

/// # Errors
///
/// Returns [`StoreError`] if the removal fails.
pub fn clear_username<S: KeyValueStore>(store: &S) -> Result<(), StoreError> {
    store.remove(USERNAME_KEY)
}

/// Greeting line, personalized when a name is stored.
#[must_use]
pub fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome!".to_owned(),
    }
}

#[cfg(test)]
#[path = "prefs_test.rs"]
mod tests;

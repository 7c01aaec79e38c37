use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{AppError, AppResult};

/// Salts and hashes a profile PIN. Only the PHC string is ever persisted.
pub fn hash_pin(pin: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::StorageError(format!("could not hash PIN: {}", e)))
}

/// Whether `entered` is the PIN a profile was created with.
///
/// A wrong PIN is `Ok(false)`; only a stored hash that cannot be parsed is an error.
pub fn pin_matches(entered: &str, stored_hash: &str) -> AppResult<bool> {
    let stored = PasswordHash::new(stored_hash)
        .map_err(|e| AppError::StorageError(format!("stored PIN hash is unreadable: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(entered.as_bytes(), &stored)
        .is_ok())
}

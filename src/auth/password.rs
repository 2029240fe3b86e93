use bcrypt::{hash, verify, DEFAULT_COST};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password must be at least 6 characters")]
    TooShort,
    #[error("Failed to hash password")]
    HashingFailed,
    #[error("Failed to verify password")]
    VerificationFailed,
}

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash_password_with_cost(password, DEFAULT_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }

    hash(password, cost).map_err(|_| PasswordError::HashingFailed)
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    verify(password, hash).map_err(|_| PasswordError::VerificationFailed)
}

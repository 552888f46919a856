//! Authentication and storage error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email is not a valid address.
    #[error("Enter a valid email: {0}")]
    InvalidEmail(String),

    /// Password is shorter than the minimum length.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur while accessing local storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key cannot be mapped to a storage slot.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Lock poisoned.
    #[error("Storage lock poisoned: {0}")]
    Poisoned(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

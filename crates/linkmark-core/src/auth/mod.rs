//! Authentication
//!
//! Credential verification and stateless session issuance. The module is
//! split by concern:
//!
//! - `password`: bcrypt hashing and verification
//! - `token`: signed, time-limited session tokens
//! - `users`: user creation and point lookups against storage
//!
//! Every operation is stateless; token issuance and verification are pure
//! functions of their input, the configured secret, and the clock.

pub mod password;
pub mod token;
pub mod users;

pub use password::{hash_password, verify_password};
pub use token::TokenSigner;
pub use users::{create_user, get_user_by_email, get_user_by_id};

use thiserror::Error;

/// Errors that can occur during authentication operations
///
/// "Wrong password" and "no such user" are not errors; they surface as
/// `false` and `None` from the respective operations.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Registration with an email that is already taken
    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    /// The stored password hash could not be processed
    #[error("Password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// A session token could not be signed
    #[error("Token signing error: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    /// SQLite error during a user query
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

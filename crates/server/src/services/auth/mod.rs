//! Authentication service.
//!
//! Registration and login with Argon2id password hashing; successful
//! operations issue an opaque bearer token from the session store.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use stylefront_core::Email;

use crate::store::{AccountStore, SessionStore, StoreError};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
pub struct AuthService<'a> {
    accounts: &'a AccountStore,
    sessions: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(accounts: &'a AccountStore, sessions: &'a SessionStore) -> Self {
        Self { accounts, sessions }
    }

    /// Register a new user and issue an access token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid,
    /// `AuthError::WeakPassword` if the password is too short, and
    /// `AuthError::UserAlreadyExists` if the email is already registered.
    pub fn register(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let password_hash = hash_password(password)?;

        self.accounts
            .create(&email, password_hash)
            .map_err(|e| match e {
                StoreError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Store(other),
            })?;

        Ok(self.sessions.issue(&email)?)
    }

    /// Login with email and password, issuing a fresh access token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or
    /// the password is wrong.
    pub fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        // An unparseable email can't belong to an account; report it the
        // same way as a wrong password.
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let password_hash = self
            .accounts
            .password_hash(&email)?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(self.sessions.issue(&email)?)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn stores() -> (AccountStore, SessionStore) {
        (AccountStore::new(), SessionStore::new())
    }

    #[test]
    fn test_register_then_login() {
        let (accounts, sessions) = stores();
        let auth = AuthService::new(&accounts, &sessions);

        auth.register("user@example.com", "correct horse").unwrap();
        let token = auth.login("user@example.com", "correct horse").unwrap();

        let identity = sessions.identity(&token).unwrap().unwrap();
        assert_eq!(identity.as_str(), "user@example.com");
    }

    #[test]
    fn test_register_duplicate() {
        let (accounts, sessions) = stores();
        let auth = AuthService::new(&accounts, &sessions);

        auth.register("user@example.com", "correct horse").unwrap();
        assert!(matches!(
            auth.register("user@example.com", "other secret"),
            Err(AuthError::UserAlreadyExists)
        ));
    }

    #[test]
    fn test_login_wrong_password() {
        let (accounts, sessions) = stores();
        let auth = AuthService::new(&accounts, &sessions);

        auth.register("user@example.com", "correct horse").unwrap();
        assert!(matches!(
            auth.login("user@example.com", "wrong horse"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_unknown_user() {
        let (accounts, sessions) = stores();
        let auth = AuthService::new(&accounts, &sessions);

        assert!(matches!(
            auth.login("nobody@example.com", "whatever1"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let (accounts, sessions) = stores();
        let auth = AuthService::new(&accounts, &sessions);

        assert!(matches!(
            auth.register("user@example.com", "short"),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let (accounts, sessions) = stores();
        let auth = AuthService::new(&accounts, &sessions);

        assert!(matches!(
            auth.register("not-an-email", "correct horse"),
            Err(AuthError::InvalidEmail(_))
        ));
    }
}

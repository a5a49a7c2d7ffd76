//! User identity records and login credentials.

/// A stored user account.
///
/// Accounts are created once at startup (the default admin) and are
/// immutable afterwards; there is no registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned unique identifier.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Salted one-way password hash.
    pub password_hash: String,
}

/// A user record awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Plaintext credentials extracted from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Bundle a username and plaintext password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Login name supplied by the caller.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Plaintext password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

//! Authentication gate guarding mutating operations.

use tracing::debug;

use super::error::DomainError;
use super::password;
use super::ports::UserRepository;
use super::user::{Credentials, User};

/// Verify credentials against the user store.
///
/// Looks up the username and checks the plaintext password against the
/// stored hash. Unknown users and bad passwords both collapse into
/// `Unauthorized` so callers cannot probe for account existence.
pub async fn verify_credentials(
    users: &dyn UserRepository,
    credentials: &Credentials,
) -> Result<User, DomainError> {
    let account = users
        .find_by_username(credentials.username())
        .await
        .map_err(|err| DomainError::internal(format!("user lookup failed: {err}")))?;

    match account {
        Some(user) if password::verify_password(credentials.password(), &user.password_hash) => {
            Ok(user)
        }
        Some(_) => {
            debug!(username = credentials.username(), "password mismatch");
            Err(DomainError::unauthorized("invalid credentials"))
        }
        None => {
            debug!(username = credentials.username(), "unknown user");
            Err(DomainError::unauthorized("invalid credentials"))
        }
    }
}

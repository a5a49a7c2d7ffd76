//! HTTP Basic Authentication plumbing.
//!
//! [`BasicCredentials`] extracts and decodes the `Authorization: Basic`
//! header; [`authenticate`] runs the extracted credentials through the
//! domain gate. Every authentication failure collapses into the same 401
//! body so responses do not reveal which step rejected the request.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{FromRequest, HttpRequest};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use crate::domain::auth::verify_credentials;
use crate::domain::ports::UserRepository;
use crate::domain::{Credentials, ErrorCode, User};

use super::error::{ApiError, ApiResult};

/// Client-facing body for every 401 response.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized Access";

/// Credentials decoded from the `Authorization: Basic` request header.
#[derive(Debug, Clone)]
pub struct BasicCredentials(Credentials);

impl BasicCredentials {
    /// Borrow the decoded credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.0
    }
}

impl FromRequest for BasicCredentials {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_authorization(req.headers().get(header::AUTHORIZATION)))
    }
}

fn unauthorized() -> ApiError {
    ApiError::unauthorized(UNAUTHORIZED_MESSAGE)
}

fn parse_authorization(value: Option<&HeaderValue>) -> Result<BasicCredentials, ApiError> {
    let raw = value
        .and_then(|v| v.to_str().ok())
        .ok_or_else(unauthorized)?;
    let (scheme, encoded) = raw.split_once(' ').ok_or_else(unauthorized)?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return Err(unauthorized());
    }
    let decoded = BASE64_STANDARD
        .decode(encoded.trim())
        .map_err(|_| unauthorized())?;
    let decoded = String::from_utf8(decoded).map_err(|_| unauthorized())?;
    // Usernames cannot contain a colon; passwords can.
    let (username, password) = decoded.split_once(':').ok_or_else(unauthorized)?;
    Ok(BasicCredentials(Credentials::new(username, password)))
}

/// Check extracted credentials against the user store.
///
/// Maps the domain's `Unauthorized` onto the uniform 401 body; other
/// failures (for example a broken database) pass through as 500s.
pub async fn authenticate(
    users: &dyn UserRepository,
    credentials: &BasicCredentials,
) -> ApiResult<User> {
    verify_credentials(users, credentials.credentials())
        .await
        .map_err(|err| match err.code() {
            ErrorCode::Unauthorized => unauthorized(),
            _ => ApiError::from(err),
        })
}

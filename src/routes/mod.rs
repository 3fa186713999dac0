mod authenticate_user;
mod create_session;
mod create_user;
mod enforce_request_deadline;
mod whoami;

pub use authenticate_user::*;
pub use create_session::*;
pub use create_user::*;
pub use enforce_request_deadline::*;
pub use whoami::*;

use axum::body::Bytes;
use secrecy::Secret;
use serde::de::DeserializeOwned;

use crate::domain::ApiError;

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

// The body is decoded whatever its content type; only undecodable JSON is
// rejected.
fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::MalformedRequest(e.to_string()))
}

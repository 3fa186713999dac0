use thiserror::Error;

use super::{SessionStoreError, UserStoreError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    MalformedRequest(String),
    #[error("{0}")]
    UnprocessableEntity(#[from] UserStoreError),
    #[error("incorrect email or password")]
    IncorrectEmailOrPassword,
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("{0}")]
    SessionError(#[from] SessionStoreError),
    #[error("request timed out")]
    RequestTimeout,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }
}

impl AsRef<str> for ValidationError {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

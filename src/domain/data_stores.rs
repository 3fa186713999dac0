use axum_extra::extract::PrivateCookieJar;
use color_eyre::eyre::Report;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{User, UserId, ValidationError};

#[async_trait::async_trait]
pub trait UserStore {
    /// Validates, hashes and persists `user`, filling in its id and clearing
    /// the plaintext password. Nothing is written if validation fails.
    async fn create(&self, user: &mut User) -> Result<(), UserStoreError>;
    async fn find(&self, id: UserId) -> Result<User, UserStoreError>;
    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError>;
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("record not found")]
    RecordNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("{0}")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Validation(_), Self::Validation(_))
                | (Self::RecordNotFound, Self::RecordNotFound)
                | (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Values kept for a client between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

#[async_trait::async_trait]
pub trait SessionStore {
    /// Returns the session carried by `jar`, or an empty one if there is none.
    async fn load(
        &self,
        jar: &PrivateCookieJar,
    ) -> Result<Session, SessionStoreError>;
    async fn save(
        &self,
        jar: PrivateCookieJar,
        session: &Session,
    ) -> Result<PrivateCookieJar, SessionStoreError>;
}

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("failed to decode session: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("{0}")]
    UnexpectedError(#[source] Report),
}

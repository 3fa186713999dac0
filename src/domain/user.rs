use color_eyre::eyre::Result;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{compute_password_hash, verify_password_hash, ValidationError};

pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 100;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl AsRef<i32> for UserId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user.
///
/// `password` only carries plaintext between request input and
/// [`User::hash_password`]; neither it nor `encrypted_password` is ever
/// serialized.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip)]
    pub password: Secret<String>,
    #[serde(skip)]
    pub encrypted_password: Secret<String>,
}

impl User {
    pub fn new(email: String, password: Secret<String>) -> Self {
        Self {
            id: UserId::default(),
            email,
            password,
            encrypted_password: Secret::new(String::new()),
        }
    }

    /// A user as read back from a store: no plaintext, only the hash.
    pub fn from_stored(
        id: UserId,
        email: String,
        encrypted_password: Secret<String>,
    ) -> Self {
        Self {
            id,
            email,
            password: Secret::new(String::new()),
            encrypted_password,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let password_required =
            self.encrypted_password.expose_secret().is_empty();

        let errors: Vec<String> = [
            ("email", check_email(&self.email)),
            (
                "password",
                check_password(
                    self.password.expose_secret(),
                    password_required,
                ),
            ),
        ]
        .into_iter()
        .filter_map(|(field, error)| error.map(|e| format!("{field}: {e}")))
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(format!("{}.", errors.join("; "))))
        }
    }

    #[tracing::instrument(name = "Hashing user password", skip_all)]
    pub async fn hash_password(&mut self) -> Result<()> {
        if self.password.expose_secret().is_empty() {
            return Ok(());
        }

        self.encrypted_password =
            compute_password_hash(self.password.clone()).await?;
        Ok(())
    }

    pub fn sanitize(&mut self) {
        self.password = Secret::new(String::new());
    }

    #[tracing::instrument(name = "Comparing user password", skip_all)]
    pub async fn compare_password(&self, candidate: &Secret<String>) -> bool {
        verify_password_hash(self.encrypted_password.clone(), candidate.clone())
            .await
            .is_ok()
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.email == other.email
            && self.password.expose_secret() == other.password.expose_secret()
            && self.encrypted_password.expose_secret()
                == other.encrypted_password.expose_secret()
    }
}

fn check_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("cannot be blank".to_owned());
    }

    if !validator::validate_email(email) {
        return Some("must be a valid email address".to_owned());
    }

    None
}

fn check_password(password: &str, required: bool) -> Option<String> {
    if password.is_empty() {
        return required.then(|| "cannot be blank".to_owned());
    }

    let char_count = password.chars().count();
    if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&char_count) {
        return Some(format!(
            "the length must be between {} and {}",
            PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
        ));
    }

    None
}

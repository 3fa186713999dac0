use color_eyre::eyre::{eyre, WrapErr};
use secrecy::{ExposeSecret, Secret};
use sqlx::PgPool;

use crate::domain::{User, UserId, UserStore, UserStoreError};

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    encrypted_password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::from_stored(
            UserId::new(row.id),
            row.email,
            Secret::new(row.encrypted_password),
        )
    }
}

fn map_lookup_error(e: sqlx::Error) -> UserStoreError {
    match e {
        sqlx::Error::RowNotFound => UserStoreError::RecordNotFound,
        err => UserStoreError::UnexpectedError(eyre!(err)),
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create(&self, user: &mut User) -> Result<(), UserStoreError> {
        user.validate()?;
        user.hash_password()
            .await
            .wrap_err("failed to hash password")
            .map_err(UserStoreError::UnexpectedError)?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, encrypted_password) VALUES ($1, $2) RETURNING id
            "#,
        )
        .bind(&user.email)
        .bind(user.encrypted_password.expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserStoreError::UserAlreadyExists
            }
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })?;

        user.id = UserId::new(id);
        user.sanitize();
        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn find(&self, id: UserId) -> Result<User, UserStoreError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, encrypted_password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map(User::from)
        .map_err(map_lookup_error)
    }

    #[tracing::instrument(
        name = "Retrieving user by email from PostgreSQL",
        skip_all
    )]
    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, encrypted_password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map(User::from)
        .map_err(map_lookup_error)
    }
}

use axum::{Extension, Json};

use crate::domain::User;

/// Echoes the user resolved by [`super::authenticate_user`].
#[tracing::instrument(name = "Whoami route handler", skip_all)]
pub async fn whoami(Extension(user): Extension<User>) -> Json<User> {
    Json(user)
}

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    domain::{ApiError, User},
};

#[tracing::instrument(name = "Create user route handler", skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let request: CreateUserRequest = super::parse_json_body(&body)?;

    let mut user = User::new(request.email, request.password);
    state.user_store.create(&mut user).await?;
    user.sanitize();

    Ok((StatusCode::CREATED, Json(user)))
}

// Missing fields decode as empty strings and are reported by validation.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default = "super::empty_secret")]
    pub password: Secret<String>,
}

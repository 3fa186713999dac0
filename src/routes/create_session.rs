use axum::{body::Bytes, extract::State, http::StatusCode};
use axum_extra::extract::PrivateCookieJar;
use secrecy::Secret;
use serde::Deserialize;

use crate::{app_state::AppState, domain::ApiError};

#[tracing::instrument(name = "Create session route handler", skip_all)]
pub async fn create_session(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    body: Bytes,
) -> Result<(PrivateCookieJar, StatusCode), ApiError> {
    let request: CreateSessionRequest = super::parse_json_body(&body)?;

    // Unknown email and wrong password must be indistinguishable.
    let user = match state.user_store.find_by_email(&request.email).await {
        Ok(user) => user,
        Err(e) => {
            tracing::debug!(error = %e, "user lookup failed");
            return Err(ApiError::IncorrectEmailOrPassword);
        }
    };
    if !user.compare_password(&request.password).await {
        return Err(ApiError::IncorrectEmailOrPassword);
    }

    let mut session = state.session_store.load(&jar).await?;
    session.user_id = Some(user.id);
    let jar = state.session_store.save(jar, &session).await?;

    Ok((jar, StatusCode::OK))
}

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default = "super::empty_secret")]
    pub password: Secret<String>,
}

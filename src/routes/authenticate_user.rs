use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::PrivateCookieJar;

use crate::{app_state::AppState, domain::ApiError};

/// Gate for protected routes: resolves the session's user and hands it to
/// the handler as a request extension.
#[tracing::instrument(name = "Authenticate user", skip_all)]
pub async fn authenticate_user(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session = state.session_store.load(&jar).await?;
    let user_id = session.user_id.ok_or(ApiError::NotAuthenticated)?;

    let mut user = state.user_store.find(user_id).await.map_err(|e| {
        tracing::debug!(error = %e, %user_id, "session user lookup failed");
        ApiError::NotAuthenticated
    })?;
    user.sanitize();

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

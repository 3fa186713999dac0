use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Duration;

use crate::domain::ApiError;

/// Abandons the inner service once `deadline` has passed, dropping any
/// pending store calls with it.
pub async fn enforce_request_deadline(
    State(deadline): State<Duration>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    tokio::time::timeout(deadline, next.run(request))
        .await
        .map_err(|_| {
            tracing::warn!(?deadline, "request deadline exceeded");
            ApiError::RequestTimeout
        })
}

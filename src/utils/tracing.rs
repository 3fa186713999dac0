use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, Response},
};
use color_eyre::eyre::Result;
use std::{net::SocketAddr, time::Duration};
use tracing::{Level, Span};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use super::constants::REQUEST_ID_HEADER;

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `log_level` when set.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let fmt_layer = fmt::layer().compact();
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}

// Runs after the request id has been set on the request headers, so the
// span carries the same id as the X-Request-ID response header.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none");
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    tracing::span!(
        Level::INFO,
        "[REQUEST]",
        request_id = %request_id,
        remote_addr = %remote_addr,
        method = %request.method(),
        uri = %request.uri(),
    )
}

pub fn on_request(request: &Request<Body>, _span: &Span) {
    tracing::event!(
        Level::INFO,
        "started {} {}",
        request.method(),
        request.uri()
    );
}

pub fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status = response.status();
    tracing::event!(
        Level::INFO,
        "completed with {} {} in {:?}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        latency
    );
}

// Request ids are always minted by the server; a client-supplied header
// would otherwise be kept by `SetRequestIdLayer`.
pub async fn strip_client_request_id(
    mut request: Request<Body>,
) -> Request<Body> {
    request.headers_mut().remove(REQUEST_ID_HEADER);
    request
}

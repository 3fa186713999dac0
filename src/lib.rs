use axum::{
    http::{HeaderName, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{error::Error, net::SocketAddr, time::Duration};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Level;

use domain::ApiError;
pub mod routes;
use crate::utils::{constants::REQUEST_ID_HEADER, tracing::*};
use routes::{
    authenticate_user, create_session, create_user, enforce_request_deadline,
    whoami,
};
pub mod app_state;
pub mod domain;
pub mod services;
use app_state::AppState;
pub mod utils;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::IncorrectEmailOrPassword | ApiError::NotAuthenticated => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::SessionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        };

        if status.is_server_error() {
            log_error_chain(&self, Level::ERROR);
        } else {
            log_error_chain(&self, Level::DEBUG);
        }

        // Store and session messages go out verbatim, driver errors included.
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    listener: TcpListener,
    router: Router,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
        request_timeout: Duration,
    ) -> Result<Self, Box<dyn Error>> {
        let router = router(app_state, request_timeout);

        let listener = TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();

        Ok(Application {
            listener,
            router,
            address,
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
    }
}

/// Layers run outermost first: request id, logging, CORS, deadline, then the
/// authentication gate on `/private`. Any `x-request-id` sent by the client
/// is discarded so every request gets a fresh one.
pub fn router(app_state: AppState, request_timeout: Duration) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    // Any origin is accepted; there is no allow-list.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::POST])
        .allow_origin(Any);

    let private = Router::new()
        .route("/whoami", get(whoami))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            authenticate_user,
        ));

    Router::new()
        .route("/users", post(create_user))
        .route("/sessions", post(create_session))
        .nest("/private", private)
        .with_state(app_state)
        .layer(middleware::from_fn_with_state(
            request_timeout,
            enforce_request_deadline,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(middleware::map_request(strip_client_request_id))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

pub async fn get_postgres_pool(
    url: &Secret<String>,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(utils::constants::db::MAX_CONNECTIONS)
        .acquire_timeout(utils::constants::db::ACQUIRE_TIMEOUT)
        .connect(url.expose_secret())
        .await
}

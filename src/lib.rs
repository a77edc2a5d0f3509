use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    serve::Serve,
    Json, Router,
};

use serde::{Deserialize, Serialize};
use std::error::Error;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use domain::ShiftAPIError;
pub mod routes;
use crate::utils::tracing::*;
use routes::{
    calendar::{get_calendar, get_deadline},
    holidays::{add_custom_holiday, get_holidays, remove_custom_holiday},
    session::new_session,
    shifts::{
        add_shift, get_deleted_shifts, get_shifts, remove_shift, restore_shift,
        toggle_shift,
    },
    staff::{add_staff, delete_staff, get_staff_list, update_staff},
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

impl IntoResponse for ShiftAPIError {
    fn into_response(self) -> Response {
        let status = match &self {
            ShiftAPIError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ShiftAPIError::MissingSession | ShiftAPIError::InvalidSession => {
                StatusCode::UNAUTHORIZED
            }
            ShiftAPIError::AdminRequired | ShiftAPIError::DeadlinePassed(_) => {
                StatusCode::FORBIDDEN
            }
            ShiftAPIError::NotFound(_) => StatusCode::NOT_FOUND,
            ShiftAPIError::Conflict(_) => StatusCode::CONFLICT,
            ShiftAPIError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                log_error_chain(&self, Level::ERROR)
            }
            _ => log_error_chain(&self, Level::DEBUG),
        }

        let body = Json(ErrorResponse {
            error: self.user_message(),
        });
        (status, body).into_response()
    }
}

fn log_error_chain(e: &(dyn Error + 'static), level: Level) {
    let separator = format!("\n{}\n", "-".repeat(83));
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        report = format!("{}\nCaused by:\n\n{:?}", report, cause);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        let allowed_origins = [
            "http://localhost:3000".parse()?,
            "http://127.0.0.1:3000".parse()?,
        ];

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_credentials(true)
            .allow_origin(allowed_origins);

        let router = Router::new()
            .route("/session", post(new_session))
            .route("/calendar", get(get_calendar))
            .route("/deadline", get(get_deadline))
            .route(
                "/staff",
                get(get_staff_list)
                    .post(add_staff)
                    .put(update_staff)
                    .delete(delete_staff),
            )
            .route("/shifts", get(get_shifts).post(add_shift).delete(remove_shift))
            .route("/shifts/toggle", post(toggle_shift))
            .route("/shifts/deleted", get(get_deleted_shifts))
            .route("/shifts/restore", post(restore_shift))
            .route("/holidays", get(get_holidays))
            .route(
                "/holidays/custom",
                post(add_custom_holiday).delete(remove_custom_holiday),
            )
            .with_state(app_state)
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

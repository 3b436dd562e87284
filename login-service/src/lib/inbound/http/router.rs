use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::api_login::api_login;
use crate::domain::login::ports::LoginServicePort;

#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<dyn LoginServicePort>,
    pub expose_error_details: bool,
}

pub fn create_router(
    login_service: Arc<dyn LoginServicePort>,
    expose_error_details: bool,
) -> Router {
    let state = AppState {
        login_service,
        expose_error_details,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        )
        // Faults are already logged at ERROR by the handler.
        .on_failure(
            |failure: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                tracing::debug!(
                    failure = %failure,
                    latency_ms = latency.as_millis(),
                    "Request failed"
                );
            },
        );

    Router::new()
        .route("/api_login", post(api_login))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

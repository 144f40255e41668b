pub mod employees;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::{observability, state::AppState};

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics() -> (axum::http::StatusCode, String) {
    observability::encode_metrics()
}

/// Build the full application router: employee CRUD plus health and metrics.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Public routes (health + metrics)
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics));

    // Employee CRUD; PUT /employee keeps the body-addressed update
    let employee_routes = Router::new()
        .route("/employees", get(employees::list))
        .route("/employee", post(employees::create).put(employees::update_from_body))
        .route(
            "/employee/:id",
            get(employees::get).put(employees::update).delete(employees::delete),
        );

    // Compose
    public
        .merge(employee_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path, headers left out
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // mark request arrival
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency on the way out
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and transport failures at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

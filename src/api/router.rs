//! Route registration and middleware stack.

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app::AppState;

use super::handlers::{
    ApiDoc, blockchain_info_handler, health_handler, wallet_balance_handler,
    wallet_transactions_handler,
};

/// Upper bound on handling time for a single request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/blockchain/info", get(blockchain_info_handler))
        .route(
            "/api/wallet/{address}/transactions",
            get(wallet_transactions_handler),
        )
        .route("/api/wallet/{address}/balance", get(wallet_balance_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                )),
        )
}

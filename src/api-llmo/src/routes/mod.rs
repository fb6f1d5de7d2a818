use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use core_llmo::health_check;

use crate::state::SharedState;

pub mod download;
pub mod generate;
pub mod logging_middleware;

//
// Router
//

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/generate", post(generate::post_generate))
        .route("/api/result", get(generate::get_result))
        .route("/download/llms.txt", get(download::get_llms_txt))
        .route("/download/llms-full.txt", get(download::get_llms_full_txt))
        // The single-page form (no client-side routing to speak of)
        .fallback_service(ServeFile::new("src/api-llmo/www/index.html"))
        // Custom route access logging
        .layer(middleware::from_fn(logging_middleware::log_route_access))
        // Tracing middleware
        .layer(TraceLayer::new_for_http())
}

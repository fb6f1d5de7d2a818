use std::sync::Arc;

use core_llmo::{ChatGpt, get_api_base_url, setup_logging};

use api_llmo::{routes, state::AppState};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    setup_logging("api_llmo=debug,tower_http=debug");

    let state = AppState::new(Arc::new(ChatGpt::default()));
    let app = routes::router().with_state(state);

    let addr = get_api_base_url().expect("Invalid HOST or PORT");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to address {}: {}", addr, e));
    axum::serve(listener, app).await.unwrap();
}

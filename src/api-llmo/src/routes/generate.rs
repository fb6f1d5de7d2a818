use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use core_llmo::{ApiKey, GenerationRequest, generate_site_docs};

use crate::models::{GenerateError, GeneratePayload, GenerateResponse, ResultError};
use crate::state::SharedState;

/// POST /api/generate - one synchronous completion round trip.
///
/// On success the session slot is overwritten with the fresh result. On any
/// failure the previously stored result (if any) is left untouched.
pub async fn post_generate(
    State(state): State<SharedState>,
    Json(payload): Json<GeneratePayload>,
) -> Result<impl IntoResponse, GenerateError> {
    // Credential precondition: rejected before any external call is made.
    let credential = ApiKey::new(payload.api_key)?;

    let request = GenerationRequest {
        site_name: payload.site_name,
        overview: payload.overview,
        key_pages: payload.key_pages,
        notes: payload.notes,
    };

    let result = generate_site_docs(state.provider(), &credential, &request).await?;
    tracing::debug!(
        site_name = %request.site_name,
        llms_txt_bytes = result.llms_txt.len(),
        llms_full_txt_bytes = result.llms_full_txt.len(),
        "generation succeeded",
    );

    state.store_result(result.clone()).await;
    Ok((StatusCode::OK, Json(GenerateResponse::from(result))))
}

/// GET /api/result - the result stored in the session slot, if any.
pub async fn get_result(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ResultError> {
    match state.last_result().await {
        Some(result) => Ok((StatusCode::OK, Json(GenerateResponse::from(result)))),
        None => Err(ResultError::NotGenerated),
    }
}

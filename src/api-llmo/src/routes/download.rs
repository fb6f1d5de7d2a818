use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use core_llmo::export::{LLMS_FULL_TXT_FILENAME, LLMS_TXT_FILENAME, MARKDOWN_CONTENT_TYPE};

use crate::models::ResultError;
use crate::state::SharedState;

/// GET /download/llms.txt - the short artifact as a Markdown attachment.
pub async fn get_llms_txt(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ResultError> {
    let result = state.last_result().await.ok_or(ResultError::NotGenerated)?;
    Ok(attachment(LLMS_TXT_FILENAME, result.llms_txt))
}

/// GET /download/llms-full.txt - the detailed artifact as a Markdown attachment.
pub async fn get_llms_full_txt(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ResultError> {
    let result = state.last_result().await.ok_or(ResultError::NotGenerated)?;
    Ok(attachment(LLMS_FULL_TXT_FILENAME, result.llms_full_txt))
}

fn attachment(filename: &str, content: String) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        content,
    )
}

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use core_llmo::{Error, GenerationResult};

/// Request payload for POST /api/generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePayload {
    /// Completion API credential, supplied per request and never persisted.
    pub api_key: String,
    pub site_name: String,
    pub overview: String,
    pub key_pages: String,
    #[serde(default)]
    pub notes: String,
}

/// Response payload for POST /api/generate and GET /api/result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub llms_txt: String,
    pub llms_full_txt: String,
}

impl From<GenerationResult> for GenerateResponse {
    fn from(result: GenerationResult) -> Self {
        GenerateResponse {
            llms_txt: result.llms_txt,
            llms_full_txt: result.llms_full_txt,
        }
    }
}

/// Error for POST /api/generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum GenerateError {
    /// No API key supplied with the request
    #[serde(rename = "missing_credential")]
    MissingCredential,
    /// The completion call itself failed
    #[serde(rename = "completion_failure")]
    CompletionFailure(String),
    /// The completion text was not the expected two-key JSON object
    #[serde(rename = "response_parse_failure")]
    ResponseParseFailure(String),
    /// Unknown error occurred
    #[serde(rename = "unknown")]
    Unknown(String),
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            GenerateError::MissingCredential => StatusCode::BAD_REQUEST,
            GenerateError::CompletionFailure(_) | GenerateError::ResponseParseFailure(_) => {
                StatusCode::BAD_GATEWAY
            }
            GenerateError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for GenerateError {
    fn from(e: Error) -> Self {
        match e {
            Error::MissingCredential => GenerateError::MissingCredential,
            Error::CompletionFailure(err) => GenerateError::CompletionFailure(err.to_string()),
            Error::NoCompletionChoice => {
                GenerateError::CompletionFailure(Error::NoCompletionChoice.to_string())
            }
            Error::ResponseParseFailure(msg) => GenerateError::ResponseParseFailure(msg),
            Error::PromptCreationFailure(err) => GenerateError::Unknown(format!("{:?}", err)),
        }
    }
}

/// Error for GET /api/result and the download endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ResultError {
    /// Nothing has been generated in this session yet
    #[serde(rename = "not_generated")]
    NotGenerated,
}

impl IntoResponse for ResultError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ResultError::NotGenerated => StatusCode::NOT_FOUND,
        };
        (status, Json(self)).into_response()
    }
}

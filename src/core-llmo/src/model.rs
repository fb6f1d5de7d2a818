use serde::{Deserialize, Serialize};

use crate::Error;

/// The website metadata a user supplies for one generation.
///
/// All fields are free-form text. A request is constructed fresh per user
/// action and discarded after the completion round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Website name or title, e.g. "box24news.com".
    pub site_name: String,
    /// One-paragraph description of the website.
    pub overview: String,
    /// Key topics/pages, one per line or as bullet points.
    pub key_pages: String,
    /// Extra notes or links.
    pub notes: String,
}

/// A completion API credential, guaranteed non-empty.
///
/// Construction is the credential precondition: an [`ApiKey`] can only exist
/// for a key that is non-empty after trimming, so any code holding one may
/// call the completion endpoint without re-checking.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(raw: impl Into<String>) -> Result<Self, Error> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Err(Error::MissingCredential)
        } else {
            Ok(ApiKey(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Redacts the secret: never log or print the raw key.
impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(***)")
    }
}

use serde::{Deserialize, Serialize};

use crate::Error;

/// The two artifacts produced by one successful generation.
///
/// The `Deserialize` impl on this struct *is* the response schema: the
/// completion text must be a JSON object whose `llms_txt` and `llms_full_txt`
/// keys are both present with string values. Either missing, or holding a
/// non-string value, fails the whole operation. Unknown extra keys are
/// ignored since only these two are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Short, basic llms.txt (a site map for AI).
    pub llms_txt: String,
    /// Comprehensive llms-full.txt with extended details.
    pub llms_full_txt: String,
}

/// Parses raw completion text into a [`GenerationResult`].
///
/// Pure and idempotent: the same input always yields the same result or the
/// same failure. No fallback heuristics are attempted on malformed output --
/// the model's compliance is validated, not trusted.
pub fn interpret_completion(raw: &str) -> Result<GenerationResult, Error> {
    serde_json::from_str::<GenerationResult>(raw.trim())
        .map_err(|e| Error::ResponseParseFailure(e.to_string()))
}

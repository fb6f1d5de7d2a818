//! Mock LLM provider for testing
//!
//! Configurable stand-in for the completion collaborator: returns predefined
//! completion text (matched on user-prompt content) or simulates failures,
//! without making real API calls.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{
    ApiKey, Error,
    llms::{ChatPrompt, LlmProvider},
};

/// Mock LLM provider for testing
pub struct MockLlmProvider {
    /// If the user prompt contains the key, return the corresponding response.
    responses: HashMap<String, String>,
    /// Default response if no specific match found.
    default_response: Option<String>,
    /// If true, always return an error.
    should_fail: bool,
}

impl MockLlmProvider {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            default_response: None,
            should_fail: false,
        }
    }

    /// Returns `response` when the user prompt contains the given text.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider
            .responses
            .insert(prompt_contains.to_string(), response.to_string());
        provider
    }

    /// Returns `response` for any prompt.
    pub fn with_default(response: &str) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: Some(response.to_string()),
            should_fail: false,
        }
    }

    /// Always fails, standing in for a transport error.
    pub fn with_failure() -> Self {
        Self {
            responses: HashMap::new(),
            default_response: None,
            should_fail: true,
        }
    }

    /// Returns the canonical well-formed two-key JSON completion.
    pub fn with_two_key_json() -> Self {
        Self::with_default(sample_two_key_json())
    }

    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .insert(prompt_contains.to_string(), response.to_string());
    }
}

impl Default for MockLlmProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    async fn complete_prompt(
        &self,
        _credential: &ApiKey,
        prompt: &ChatPrompt,
    ) -> Result<String, Error> {
        if self.should_fail {
            return Err(Error::NoCompletionChoice);
        }

        for (key, response) in &self.responses {
            if prompt.user.contains(key) {
                return Ok(response.clone());
            }
        }

        if let Some(default) = &self.default_response {
            return Ok(default.clone());
        }

        Err(Error::ResponseParseFailure(
            "Mock LLM provider has no response configured for this prompt".to_string(),
        ))
    }
}

//
// Test Fixtures
//

/// Completion that parses into a valid [`crate::GenerationResult`].
pub fn sample_two_key_json() -> &'static str {
    r##"{"llms_txt":"# box24news.com\n\n> Timely and reliable news updates.\n\n- [Sports](https://box24news.com/category/sports)\n- [Politics](https://box24news.com/category/politics)","llms_full_txt":"# box24news.com Full\n\n> Timely and reliable news updates.\n\n## Sections\n\n- [Sports](https://box24news.com/category/sports): daily sports digests\n- [Politics](https://box24news.com/category/politics): expert analysis"}"##
}

/// Completion that is not JSON at all.
pub fn sample_not_json() -> &'static str {
    "Sure! Here are your two files:\n\n# box24news.com\n..."
}

/// Valid JSON object missing the `llms_full_txt` key.
pub fn sample_missing_full_key() -> &'static str {
    r##"{"llms_txt":"# box24news.com"}"##
}

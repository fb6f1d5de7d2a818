pub mod chatgpt;
pub mod mock;
pub mod prompts;

use async_trait::async_trait;

pub use chatgpt::ChatGpt;
pub use prompts::{ChatPrompt, compose_prompt};

use crate::{ApiKey, Error, GenerationRequest, GenerationResult, interpret_completion};

/// Interface to a hosted LLM that lets us complete a two-part chat prompt and
/// await the raw response text.
///
/// The credential travels with every call: it is supplied per session and
/// never stored by a provider.
#[async_trait]
pub trait LlmProvider {
    async fn complete_prompt(
        &self,
        credential: &ApiKey,
        prompt: &ChatPrompt,
    ) -> Result<String, Error>;
}

/// Runs one generation round trip: compose the prompt, make a single
/// completion call, interpret the response.
///
/// No retries -- a transport failure or an unparseable completion surfaces
/// immediately and the caller must re-trigger manually.
pub async fn generate_site_docs<P: LlmProvider + ?Sized>(
    provider: &P,
    credential: &ApiKey,
    request: &GenerationRequest,
) -> Result<GenerationResult, Error> {
    let prompt = compose_prompt(request)?;
    let raw = provider.complete_prompt(credential, &prompt).await?;
    interpret_completion(&raw)
}

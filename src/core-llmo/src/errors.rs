/// Custom error type for prompt creation, completion calls & response interpretation.
#[derive(Debug)]
pub enum Error {
    /// No API credential supplied. Checked before any completion call is made.
    MissingCredential,

    /// Internal error: prompt substitution failed.
    PromptCreationFailure(subst::Error),

    /// Error calling the completion endpoint.
    CompletionFailure(async_openai::error::OpenAIError),

    /// The completion endpoint returned an empty choice list.
    NoCompletionChoice,

    /// Completion text is not a JSON object with string-valued
    /// `llms_txt` and `llms_full_txt` keys.
    ResponseParseFailure(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingCredential => write!(f, "No API key supplied"),
            Error::PromptCreationFailure(err) => write!(f, "Failed to create prompt: {}", err),
            Error::CompletionFailure(err) => write!(f, "Error calling completion endpoint: {}", err),
            Error::NoCompletionChoice => write!(f, "No response from completion endpoint"),
            Error::ResponseParseFailure(msg) => write!(f, "Failed to parse completion as JSON: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<subst::Error> for Error {
    fn from(err: subst::Error) -> Self {
        Error::PromptCreationFailure(err)
    }
}

impl From<async_openai::error::OpenAIError> for Error {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        Error::CompletionFailure(err)
    }
}

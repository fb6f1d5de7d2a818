pub mod common;
pub mod errors;
pub mod export;
pub mod interpret;
pub mod llms;
pub mod model;

pub use common::{get_api_base_url, health_check, is_env_set, setup_logging};
pub use errors::Error;
pub use interpret::{GenerationResult, interpret_completion};
pub use llms::{ChatGpt, LlmProvider, generate_site_docs};
pub use model::{ApiKey, GenerationRequest};

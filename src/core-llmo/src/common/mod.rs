pub mod env_check;
pub mod health;
pub mod hostname;
pub mod logging;

pub use env_check::is_env_set;
pub use health::health_check;
pub use hostname::{HostPortError, get_api_base_url};
pub use logging::setup_logging;

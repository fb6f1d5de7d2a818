/// True if the environment variable exists and is non-empty after trimming.
pub fn is_env_set(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => !value.trim().is_empty(),
        Err(_) => false,
    }
}

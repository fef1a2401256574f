use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    /// Path to the JSON notes container (bind-mount this in Docker).
    pub const NOTES_FILE: &str = "NOTES_FILE";
    /// Path to the request log file used by the request-logger binary.
    pub const REQUEST_LOG_FILE: &str = "REQUEST_LOG_FILE";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3000;
    pub const NOTES_FILE: &str = "./data/notes.json";
    pub const REQUEST_LOG_FILE: &str = "./logs/app.log";
}

/// Get the listen port
pub fn port() -> u16 {
    env::var(env_vars::PORT)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(defaults::PORT)
}

/// Get the notes container file path
pub fn notes_file() -> PathBuf {
    env::var(env_vars::NOTES_FILE)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::NOTES_FILE))
}

/// Get the request log file path
pub fn request_log_file() -> PathBuf {
    env::var(env_vars::REQUEST_LOG_FILE)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::REQUEST_LOG_FILE))
}

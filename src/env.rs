/// Environment variable names used by the factory for convenient
/// configuration from services.
///
/// These are purely helpers; the core logger types remain decoupled from
/// environment access.

/// Override for the `chrono` pattern used to format the `timestamp` field.
pub const JSON_LOG_TIMESTAMP_FORMAT_ENV: &str = "JSON_LOG_TIMESTAMP_FORMAT";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

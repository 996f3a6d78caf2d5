//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, ports and paths come from Leptos' own configuration.

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Tracing filter directives, e.g. `info,tower_http=debug`
    pub log_filter: String,

    /// Whether responses are Brotli/Gzip compressed
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("COMPRESSION").ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, compression: Option<String>) -> Self {
        Self {
            log_filter: log_filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            compression: compression.as_deref().map(parse_flag).unwrap_or(true),
        }
    }
}

/// Anything but an explicit "off" value counts as enabled
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

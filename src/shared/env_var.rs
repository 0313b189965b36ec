//! Centralized reader for REVIEWKIT_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const SERVER_ENDPOINT: &str = "REVIEWKIT_SERVER_ENDPOINT";
const COOKIE: &str = "REVIEWKIT_COOKIE";
const LOG: &str = "REVIEWKIT_LOG";

/// Snapshot of all REVIEWKIT_* environment variables at load time.
#[derive(Debug, Default)]
pub struct EnvVars {
    /// API base URL, overriding `api.server_endpoint` from the config file.
    pub server_endpoint: Option<String>,

    /// Raw cookie string (`name=value; other=value`), overriding the cookie file.
    pub cookie: Option<String>,

    /// Log filter directive understood by `tracing_subscriber::EnvFilter`.
    pub log: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all REVIEWKIT_* environment variables from the current process.
    pub fn load() -> Self {
        Self {
            server_endpoint: non_empty_var(SERVER_ENDPOINT),
            cookie: non_empty_var(COOKIE),
            log: non_empty_var(LOG),
        }
    }
}

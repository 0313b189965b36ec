//! Cookie accessor backing the auth token.
//!
//! Cookies are kept as a single `document.cookie`-style string
//! (`name=value; other=value`). The string is loaded from REVIEWKIT_COOKIE,
//! or else from a cookie file.

use std::path::{Path, PathBuf};

use super::dirs;
use super::env_var::EnvVars;

/// Name of the cookie holding the auth token.
pub const TOKEN_COOKIE: &str = "token";

const DEFAULT_COOKIE_FILE: &str = "cookie";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    raw: String,
}

impl CookieJar {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Load cookies from REVIEWKIT_COOKIE, then `cookie_file`, then the
    /// default file under the config directory.
    ///
    /// A missing file yields an empty jar; other read errors are returned.
    pub fn load(cookie_file: Option<&Path>) -> std::io::Result<Self> {
        if let Some(raw) = EnvVars::load().cookie {
            return Ok(Self::new(raw));
        }

        let path = match cookie_file {
            Some(path) => Some(path.to_path_buf()),
            None => default_cookie_file(),
        };
        let Some(path) = path else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Self::new(content.trim())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "cookie file not found");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Returns the value of the first cookie named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.raw
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| key.trim() == name)
            .map(|(_, value)| value.trim())
    }

    /// Auth token to send as the `Authorization` header, or "" when unset.
    pub fn token(&self) -> &str {
        self.get(TOKEN_COOKIE).unwrap_or("")
    }
}

fn default_cookie_file() -> Option<PathBuf> {
    dirs::app_config_dir().map(|dir| dir.join(DEFAULT_COOKIE_FILE))
}

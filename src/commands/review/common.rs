//! Shared setup for review commands.

use std::io::Write;

use super::error::{Result, ReviewCommandError};
use crate::infra::api::{RequestProps, ReviewClient};
use crate::shared::config::Config;
use crate::shared::cookie::CookieJar;
use crate::shared::env_var::EnvVars;

/// Client plus per-call props, resolved once per invocation.
pub struct ApiContext {
    pub client: ReviewClient,
    pub props: RequestProps,
}

impl ApiContext {
    /// Build the context from `--server`, the environment and the config file.
    pub fn load(server_flag: Option<&str>, config: &Config) -> Result<Self> {
        let env = EnvVars::load();
        let endpoint = resolve_endpoint(
            server_flag,
            env.server_endpoint.as_deref(),
            config.api.server_endpoint.as_deref(),
        )?;
        let cookies = CookieJar::load(config.auth.cookie_file.as_deref())
            .map_err(ReviewCommandError::CookieError)?;

        Ok(Self {
            client: ReviewClient::new(cookies),
            props: RequestProps::new(endpoint),
        })
    }
}

/// Pick the endpoint by precedence: flag, then environment, then config.
fn resolve_endpoint(
    flag: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
) -> Result<String> {
    [flag, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
        .ok_or_else(|| ReviewCommandError::MissingEndpoint.into())
}

/// Pretty-print a JSON value followed by a newline.
pub(crate) fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

use anyhow::{Context, Result};
use async_trait::async_trait;

/// Environment variable holding a pre-issued OAuth access token.
const TOKEN_ENV_VAR: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Supplies the bearer token for Sheets API calls.
///
/// The JWT-signing OAuth exchange for service accounts lives behind this
/// seam; deployments that already mint tokens out of band plug in
/// `EnvTokenProvider` or `StaticTokenProvider` directly.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

/// Reads the token from `GOOGLE_OAUTH_ACCESS_TOKEN` on every call, so an
/// external refresher can rotate it without restarting the process.
#[derive(Debug, Default)]
pub struct EnvTokenProvider;

#[async_trait]
impl TokenProvider for EnvTokenProvider {
    async fn access_token(&self) -> Result<String> {
        std::env::var(TOKEN_ENV_VAR).with_context(|| format!("{TOKEN_ENV_VAR} is not set"))
    }
}

/// Fixed token, mainly for tests and one-shot tools.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

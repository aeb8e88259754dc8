use hermes_client::{AnthropicProvider, ContentProvider, PerplexityProvider, ProviderKind};
use hermes_core::AppError;

/// Server configuration read from the environment.
///
/// A missing required credential is a fatal startup error, never a
/// per-request one.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub provider: ProviderKind,
    pub openai_api_key: String,
    /// Credential for the selected provider backend.
    pub provider_api_key: String,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `OPENAI_API_KEY` (required)
    /// - `HERMES_PROVIDER` (optional, `perplexity` or `anthropic`; defaults to perplexity)
    /// - `PERPLEXITY_API_KEY` / `ANTHROPIC_API_KEY` (required for the selected provider)
    /// - `HERMES_PORT` (optional, defaults to 8000)
    pub fn from_env() -> Result<Self, AppError> {
        let openai_api_key = require_env("OPENAI_API_KEY")?;

        let provider = match std::env::var("HERMES_PROVIDER") {
            Err(_) => ProviderKind::Perplexity,
            Ok(raw) => raw.parse().map_err(AppError::ConfigError)?,
        };

        let provider_api_key = match provider {
            ProviderKind::Perplexity => require_env("PERPLEXITY_API_KEY")?,
            ProviderKind::Anthropic => require_env("ANTHROPIC_API_KEY")?,
        };

        let port = match std::env::var("HERMES_PORT") {
            Err(_) => 8000,
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!("Invalid HERMES_PORT '{raw}': must be a port number"))
            })?,
        };

        Ok(Self {
            port,
            provider,
            openai_api_key,
            provider_api_key,
        })
    }

    /// Build the provider variant selected by configuration.
    pub fn build_provider(&self) -> Result<ContentProvider, AppError> {
        match self.provider {
            ProviderKind::Perplexity => Ok(ContentProvider::Perplexity(PerplexityProvider::new(
                &self.provider_api_key,
            )?)),
            ProviderKind::Anthropic => Ok(ContentProvider::Anthropic(AnthropicProvider::new(
                &self.provider_api_key,
            )?)),
        }
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name)
        .map_err(|_| AppError::ConfigError(format!("{name} environment variable is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: ProviderKind) -> ServerConfig {
        ServerConfig {
            port: 8000,
            provider,
            openai_api_key: "sk-test".into(),
            provider_api_key: "pk-test".into(),
        }
    }

    #[test]
    fn builds_the_configured_provider_variant() {
        assert!(matches!(
            config(ProviderKind::Perplexity).build_provider(),
            Ok(ContentProvider::Perplexity(_))
        ));
        assert!(matches!(
            config(ProviderKind::Anthropic).build_provider(),
            Ok(ContentProvider::Anthropic(_))
        ));
    }

    #[test]
    fn empty_provider_key_fails_construction() {
        let mut cfg = config(ProviderKind::Perplexity);
        cfg.provider_api_key.clear();
        assert!(matches!(
            cfg.build_provider(),
            Err(AppError::ConfigError(_))
        ));
    }
}

//! Backend configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_API_URL` - Upstream base URL (e.g., <https://your-store.myshopify.com>)
//! - `SHOPIFY_ACCESS_TOKEN` - Admin API access token (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `SHOPIFY_API_VERSION` - Admin API version (default: 2024-10)
//! - `BE_PORT` - Listen port (default: 3000)

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_API_VERSION: &str = "2024-10";
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Backend application configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Port to listen on
    pub port: u16,
    /// Shopify Admin API configuration
    pub shopify: ShopifyConfig,
}

/// Shopify Admin API configuration.
///
/// Implements `Debug` manually to redact the HIGH PRIVILEGE access token.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Upstream base URL (no trailing slash)
    pub api_url: String,
    /// Admin API version pinned for every call (e.g., 2024-10)
    pub api_version: String,
    /// Admin API access token
    pub access_token: SecretString,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl BackendConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = get_required_env("SHOPIFY_API_URL")?;
        let access_token = SecretString::from(get_required_env("SHOPIFY_ACCESS_TOKEN")?);

        let api_version = get_optional_env("SHOPIFY_API_VERSION")
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let port = match get_optional_env("BE_PORT") {
            Some(value) => value.parse().map_err(|_| {
                ConfigError::InvalidEnvVar(
                    "BE_PORT".to_string(),
                    format!("not a valid port number: {value}"),
                )
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            shopify: ShopifyConfig {
                api_url: api_url.trim_end_matches('/').to_string(),
                api_version,
                access_token,
            },
        })
    }
}

fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(unsafe_code)]

    use super::*;

    // Environment variables are process-global, so all phases run inside a
    // single test to avoid interference between parallel tests.
    #[test]
    fn test_from_env() {
        unsafe {
            std::env::remove_var("SHOPIFY_API_URL");
            std::env::remove_var("SHOPIFY_ACCESS_TOKEN");
            std::env::remove_var("SHOPIFY_API_VERSION");
            std::env::remove_var("BE_PORT");
        }

        // Missing required variable is reported by name
        let err = BackendConfig::from_env().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SHOPIFY_API_URL"
        );

        unsafe {
            std::env::set_var("SHOPIFY_API_URL", "https://test-store.myshopify.com/");
            std::env::set_var("SHOPIFY_ACCESS_TOKEN", "shpat_test_token");
        }

        // Defaults apply when optional variables are unset
        let config = BackendConfig::from_env().expect("config should load");
        assert_eq!(config.port, 3000);
        assert_eq!(config.shopify.api_version, "2024-10");
        // Trailing slash is stripped so the endpoint joins cleanly
        assert_eq!(config.shopify.api_url, "https://test-store.myshopify.com");

        unsafe {
            std::env::set_var("BE_PORT", "4100");
            std::env::set_var("SHOPIFY_API_VERSION", "2025-01");
        }
        let config = BackendConfig::from_env().expect("config should load");
        assert_eq!(config.port, 4100);
        assert_eq!(config.shopify.api_version, "2025-01");

        unsafe {
            std::env::set_var("BE_PORT", "not-a-port");
        }
        let err = BackendConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));

        unsafe {
            std::env::remove_var("SHOPIFY_API_URL");
            std::env::remove_var("SHOPIFY_ACCESS_TOKEN");
            std::env::remove_var("SHOPIFY_API_VERSION");
            std::env::remove_var("BE_PORT");
        }
    }

    #[test]
    fn test_debug_redacts_access_token() {
        let config = ShopifyConfig {
            api_url: "https://test-store.myshopify.com".to_string(),
            api_version: "2024-10".to_string(),
            access_token: SecretString::from("shpat_very_secret".to_string()),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("shpat_very_secret"));
    }
}

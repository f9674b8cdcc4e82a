//! Configuration types for the API client.

mod auth;
mod builder;
mod content_type;

pub use auth::{ApiKeyAuthConfig, BearerAuthConfig, DEFAULT_API_KEY_HEADER};
pub use builder::ConfigurationBuilder;
pub use content_type::ContentType;
use serde::{Deserialize, Serialize};

use crate::error::{require_non_blank, Result};

/// Immutable connection settings for the API client.
///
/// Produced by [`ConfigurationBuilder::build`] or deserialized from a settings file, in which
/// case the same validation applies.
///
/// ```
/// # use api_client::{ConfigurationBuilder, ContentType};
/// let config = ConfigurationBuilder::new()
///     .with_base_url("https://api.example.com")?
///     .with_bearer_token("token")?
///     .with_content_type_value(ContentType::json())
///     .build()?;
///
/// assert_eq!(config.base_url(), "https://api.example.com");
/// # Ok::<(), api_client::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigurationRepr", rename_all = "camelCase")]
pub struct Configuration {
    base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    bearer_token: Option<BearerAuthConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<ApiKeyAuthConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<ContentType>,
}

impl Configuration {
    /// Base URL of the targeted API, exactly as supplied.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer credential, if configured.
    pub fn bearer_token(&self) -> Option<&BearerAuthConfig> {
        self.bearer_token.as_ref()
    }

    /// API key credential, if configured.
    pub fn api_key(&self) -> Option<&ApiKeyAuthConfig> {
        self.api_key.as_ref()
    }

    /// Content type, if configured.
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigurationRepr {
    base_url: String,
    #[serde(default)]
    bearer_token: Option<BearerAuthConfig>,
    #[serde(default)]
    api_key: Option<ApiKeyAuthConfig>,
    #[serde(default)]
    content_type: Option<ContentType>,
}

impl TryFrom<ConfigurationRepr> for Configuration {
    type Error = crate::Error;

    fn try_from(repr: ConfigurationRepr) -> Result<Self> {
        require_non_blank("base_url", &repr.base_url)?;
        Ok(Self {
            base_url: repr.base_url,
            bearer_token: repr.bearer_token,
            api_key: repr.api_key,
            content_type: repr.content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_configuration() {
        let config: Configuration = serde_json::from_str(
            r#"{
                "baseUrl": "https://api.example.com",
                "bearerToken": { "secret": "t" },
                "apiKey": { "key": "X-KEY", "secret": "k" },
                "contentType": "application/json"
            }"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "https://api.example.com");
        assert_eq!(config.bearer_token().unwrap().secret(), "t");
        assert_eq!(config.api_key().unwrap().key(), "X-KEY");
        assert_eq!(config.content_type(), Some(&ContentType::json()));
    }

    #[test]
    fn test_deserialize_rejects_blank_base_url() {
        assert!(serde_json::from_str::<Configuration>(r#"{"baseUrl":"  "}"#).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        assert!(
            serde_json::from_str::<Configuration>(r#"{"baseUrl":"https://a","user":"x"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let config = ConfigurationBuilder::new()
            .with_base_url("https://api.example.com")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({ "baseUrl": "https://api.example.com" })
        );
    }
}

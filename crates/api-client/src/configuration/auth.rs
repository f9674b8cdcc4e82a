use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{require_non_blank, Result};

/// Header name used by [`ApiKeyAuthConfig::with_default_key`].
pub const DEFAULT_API_KEY_HEADER: &str = "X-API-KEY";

/// Shared-secret bearer credential, sent as `Authorization: Bearer <secret>`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BearerAuthConfigRepr", rename_all = "camelCase")]
pub struct BearerAuthConfig {
    secret: String,
}

impl BearerAuthConfig {
    /// Create a bearer credential, rejecting a blank secret.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        require_non_blank("secret", &secret)?;
        Ok(Self { secret })
    }

    /// The bearer secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for BearerAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuthConfig")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Named API key credential, sent as `<key>: <secret>`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ApiKeyAuthConfigRepr", rename_all = "camelCase")]
pub struct ApiKeyAuthConfig {
    key: String,
    secret: String,
}

impl ApiKeyAuthConfig {
    /// Create an API key credential. Both `key` and `secret` must be non-blank.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let secret = secret.into();
        require_non_blank("key", &key)?;
        require_non_blank("secret", &secret)?;
        Ok(Self { key, secret })
    }

    /// Create an API key credential under the [`DEFAULT_API_KEY_HEADER`] name.
    pub fn with_default_key(secret: impl Into<String>) -> Result<Self> {
        Self::new(DEFAULT_API_KEY_HEADER, secret)
    }

    /// Header name the secret is sent under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The API key secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for ApiKeyAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyAuthConfig")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

// Deserialization goes through these so the same validation applies to both paths.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct BearerAuthConfigRepr {
    secret: String,
}

impl TryFrom<BearerAuthConfigRepr> for BearerAuthConfig {
    type Error = crate::Error;

    fn try_from(repr: BearerAuthConfigRepr) -> Result<Self> {
        Self::new(repr.secret)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ApiKeyAuthConfigRepr {
    #[serde(default = "default_api_key_header")]
    key: String,
    secret: String,
}

fn default_api_key_header() -> String {
    DEFAULT_API_KEY_HEADER.to_string()
}

impl TryFrom<ApiKeyAuthConfigRepr> for ApiKeyAuthConfig {
    type Error = crate::Error;

    fn try_from(repr: ApiKeyAuthConfigRepr) -> Result<Self> {
        Self::new(repr.key, repr.secret)
    }
}

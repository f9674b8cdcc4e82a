//! Fluent builder for [`Configuration`]
//!
//! Environment variables read by [`ConfigurationBuilder::from_env`]:
//! - `API_CLIENT_BASE_URL`: Base URL of the targeted API
//! - `API_CLIENT_BEARER_TOKEN`: Bearer secret
//! - `API_CLIENT_API_KEY_NAME`: API key header name (defaults to `X-API-KEY`)
//! - `API_CLIENT_API_KEY_SECRET`: API key secret
//! - `API_CLIENT_CONTENT_TYPE`: MIME type for outgoing requests

use std::env;

use super::{ApiKeyAuthConfig, BearerAuthConfig, Configuration, ContentType};
use crate::error::{require_non_blank, Error, Result};

const BASE_URL_VAR: &str = "API_CLIENT_BASE_URL";
const BEARER_TOKEN_VAR: &str = "API_CLIENT_BEARER_TOKEN";
const API_KEY_NAME_VAR: &str = "API_CLIENT_API_KEY_NAME";
const API_KEY_SECRET_VAR: &str = "API_CLIENT_API_KEY_SECRET";
const CONTENT_TYPE_VAR: &str = "API_CLIENT_CONTENT_TYPE";

/// Accumulates validated settings and produces a [`Configuration`].
///
/// Every setter validates its input immediately and leaves the builder untouched on failure.
/// [`build`](ConfigurationBuilder::build) can be called repeatedly; each call snapshots the
/// current state.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    base_url: Option<String>,
    bearer_token: Option<BearerAuthConfig>,
    api_key: Option<ApiKeyAuthConfig>,
    content_type: Option<ContentType>,
}

impl ConfigurationBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded from environment variables.
    ///
    /// Unset variables are skipped. Set but blank variables fail like the matching setter.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::new();

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            builder.with_base_url(base_url)?;
        }
        if let Some(secret) = lookup(BEARER_TOKEN_VAR) {
            builder.with_bearer_token(secret)?;
        }
        if let Some(secret) = lookup(API_KEY_SECRET_VAR) {
            match lookup(API_KEY_NAME_VAR) {
                Some(key) => builder.with_api_key(key, secret)?,
                None => builder.with_api_key_secret(secret)?,
            };
        }
        if let Some(content_type) = lookup(CONTENT_TYPE_VAR) {
            builder.with_content_type(content_type)?;
        }

        Ok(builder)
    }

    /// Set the base URL. Stored verbatim; blank values are rejected.
    pub fn with_base_url(&mut self, base_url: impl Into<String>) -> Result<&mut Self> {
        let base_url = base_url.into();
        require_non_blank("base_url", &base_url)?;
        self.base_url = Some(base_url);
        Ok(self)
    }

    /// Set the bearer secret, replacing any previous one.
    pub fn with_bearer_token(&mut self, secret: impl Into<String>) -> Result<&mut Self> {
        self.bearer_token = Some(BearerAuthConfig::new(secret)?);
        Ok(self)
    }

    /// Set an API key credential sent under the `key` header.
    pub fn with_api_key(
        &mut self,
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<&mut Self> {
        self.api_key = Some(ApiKeyAuthConfig::new(key, secret)?);
        Ok(self)
    }

    /// Set an API key credential under the default `X-API-KEY` header.
    pub fn with_api_key_secret(&mut self, secret: impl Into<String>) -> Result<&mut Self> {
        self.api_key = Some(ApiKeyAuthConfig::with_default_key(secret)?);
        Ok(self)
    }

    /// Set the content type from a MIME string.
    pub fn with_content_type(&mut self, content_type: impl Into<String>) -> Result<&mut Self> {
        self.content_type = Some(ContentType::new(content_type)?);
        Ok(self)
    }

    /// Set an already validated content type.
    pub fn with_content_type_value(&mut self, content_type: ContentType) -> &mut Self {
        self.content_type = Some(content_type);
        self
    }

    /// Produce a [`Configuration`] from the current state.
    ///
    /// Fails with [`Error::FailedPrecondition`] if no base URL has been set.
    pub fn build(&self) -> Result<Configuration> {
        let base_url = self
            .base_url
            .clone()
            .ok_or(Error::FailedPrecondition("base URL not set"))?;

        Ok(Configuration {
            base_url,
            bearer_token: self.bearer_token.clone(),
            api_key: self.api_key.clone(),
            content_type: self.content_type.clone(),
        })
    }
}

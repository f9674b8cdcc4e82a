use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

use crate::{Configuration, Error};

/// Middleware that applies a [`Configuration`]'s credentials and content type to requests.
///
/// Headers already present on a request are left untouched.
#[derive(Debug, Clone)]
pub struct ConfigurationHeadersMiddleware {
    headers: HeaderMap,
}

impl ConfigurationHeadersMiddleware {
    /// Pre-compute the headers for `config`, rejecting values that are not valid header
    /// values.
    pub fn new(config: &Configuration) -> Result<Self, Error> {
        Ok(Self {
            headers: build_configuration_headers(config)?,
        })
    }

    /// The headers added to each request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

fn build_configuration_headers(config: &Configuration) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    if let Some(bearer) = config.bearer_token() {
        let mut value = header_value("bearer_token", &format!("Bearer {}", bearer.secret()))?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    if let Some(api_key) = config.api_key() {
        let name =
            HeaderName::from_bytes(api_key.key().as_bytes()).map_err(|e| Error::InvalidArgument {
                name: "key",
                reason: e.to_string(),
            })?;
        let mut value = header_value("secret", api_key.secret())?;
        value.set_sensitive(true);
        headers.insert(name, value);
    }

    if let Some(content_type) = config.content_type() {
        let value = header_value("content_type", content_type.as_str())?;
        headers.insert(header::CONTENT_TYPE, value.clone());
        headers.insert(header::ACCEPT, value);
    }

    Ok(headers)
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidArgument {
        name,
        reason: e.to_string(),
    })
}

#[async_trait::async_trait]
impl reqwest_middleware::Middleware for ConfigurationHeadersMiddleware {
    async fn handle(
        &self,
        mut req: reqwest::Request,
        extensions: &mut http::Extensions,
        next: reqwest_middleware::Next<'_>,
    ) -> Result<reqwest::Response, reqwest_middleware::Error> {
        let request_headers = req.headers_mut();
        for (name, value) in &self.headers {
            if !request_headers.contains_key(name) {
                request_headers.insert(name.clone(), value.clone());
            }
        }

        tracing::trace!(url = %req.url(), "Applied configuration headers");

        next.run(req, extensions).await
    }
}

use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;

use super::ConfigurationHeadersMiddleware;
use crate::{Configuration, Error};

/// Response returned by an [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Full response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Create a response from a status and body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Errors raised by a transport while performing a request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The underlying HTTP client failed.
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// A middleware in the client stack failed.
    #[error(transparent)]
    ReqwestMiddleware(#[from] reqwest_middleware::Error),

    /// Any other transport failure.
    #[error("Transport failure: {0}")]
    Other(String),
}

/// Abstraction over the network layer performing GET requests.
///
/// Lets tests simulate status codes and payloads without real network I/O.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request against an absolute URL and read the full body.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] backed by a `reqwest` client with middleware support.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Wrap an existing client.
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self { client }
    }

    /// Build a client that applies the configuration's credentials and content type to every
    /// request.
    pub fn from_configuration(config: &Configuration) -> Result<Self, Error> {
        let middleware = ConfigurationHeadersMiddleware::new(config)?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(TransportError::from)?;
        let client = reqwest_middleware::ClientBuilder::new(client)
            .with(middleware)
            .build();

        Ok(Self { client })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new().into())
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

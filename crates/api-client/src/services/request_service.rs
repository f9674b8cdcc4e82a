//! GET requests with status enforcement and typed decoding

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Decoder, HttpTransport, JsonDecoder, ReqwestTransport};
use crate::{
    error::{require_non_blank, Error, Result},
    Configuration,
};

/// Performs GET requests through an [`HttpTransport`] and decodes successful responses.
///
/// Holds no per-request state, so a single instance can serve many concurrent calls.
#[derive(Clone)]
pub struct RequestService<D = JsonDecoder> {
    transport: Arc<dyn HttpTransport>,
    decoder: D,
}

impl RequestService {
    /// Create a service decoding JSON responses.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_decoder(transport, JsonDecoder)
    }

    /// Create a service over a [`ReqwestTransport`] built from `config`.
    pub fn from_configuration(config: &Configuration) -> Result<Self> {
        let transport = ReqwestTransport::from_configuration(config)?;
        Ok(Self::new(Arc::new(transport)))
    }
}

impl<D: Decoder> RequestService<D> {
    /// Create a service with a custom decoder.
    pub fn with_decoder(transport: Arc<dyn HttpTransport>, decoder: D) -> Self {
        Self { transport, decoder }
    }

    /// GET `url` and decode the body into `T`.
    ///
    /// Fails with [`Error::InvalidArgument`] for a blank `url` without touching the transport,
    /// [`Error::RequestFailed`] for a non-success status, and [`Error::DecodeFailed`] when the
    /// body does not match `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        require_non_blank("url", url)?;

        debug!(method = "GET", url = %url, "Request");

        let response = self.transport.get(url).await?;
        let status = response.status;

        if !status.is_success() {
            debug!(status = %status, "Error response");
            return Err(Error::RequestFailed { status });
        }

        debug!(status = %status, body_len = response.body.len(), "Response");

        self.decoder
            .decode(&response.body)
            .map_err(Error::DecodeFailed)
    }
}

impl<D> std::fmt::Debug for RequestService<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestService").finish_non_exhaustive()
    }
}

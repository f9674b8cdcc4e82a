use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use api_client::{HttpResponse, HttpTransport, TransportError};
use reqwest::StatusCode;

/// In-memory [`HttpTransport`] replaying scripted responses in order.
///
/// Records every requested URL. Running out of scripted responses yields a
/// [`TransportError::Other`].
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    /// Create a transport with no scripted responses.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a transport answering once with `status` and `body`.
    pub fn respond_with(status: u16, body: impl Into<String>) -> Arc<Self> {
        let transport = Self::new();
        transport.push_response(status, body);
        transport
    }

    /// Queue a response.
    ///
    /// # Panics
    ///
    /// Panics if `status` is not a valid HTTP status code.
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        let status = StatusCode::from_u16(status).expect("Invalid HTTP status code");
        self.push(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: TransportError) {
        self.push(Err(error));
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }
}

#[async_trait::async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.to_string());

        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other(format!("no response scripted for {url}"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_responses_in_order() {
        let transport = ScriptedTransport::new();
        transport.push_response(200, "first");
        transport.push_response(500, "second");

        let first = transport.get("https://a.test/1").await.unwrap();
        let second = transport.get("https://a.test/2").await.unwrap();

        assert_eq!(first, HttpResponse::new(StatusCode::OK, "first"));
        assert_eq!(second.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            transport.requests(),
            vec!["https://a.test/1".to_string(), "https://a.test/2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_exhausted_script_returns_error() {
        let transport = ScriptedTransport::new();

        let result = transport.get("https://a.test").await;

        assert!(matches!(result, Err(TransportError::Other(_))));
    }
}

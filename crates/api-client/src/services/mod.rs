//! Request execution: transport, decoding and the request service.

mod decode;
mod headers_middleware;
mod request_service;
mod transport;

pub use decode::{DecodeError, Decoder, JsonDecoder};
pub use headers_middleware::ConfigurationHeadersMiddleware;
pub use request_service::RequestService;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};

#![doc = include_str!("../README.md")]

mod configuration;
mod error;
mod services;

pub use configuration::{
    ApiKeyAuthConfig, BearerAuthConfig, Configuration, ConfigurationBuilder, ContentType,
    DEFAULT_API_KEY_HEADER,
};
pub use error::{Error, Result};
pub use services::{
    ConfigurationHeadersMiddleware, DecodeError, Decoder, HttpResponse, HttpTransport,
    JsonDecoder, ReqwestTransport, RequestService, TransportError,
};

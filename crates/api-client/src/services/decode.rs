use serde::de::DeserializeOwned;

/// Failure to decode a payload into the requested type.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct DecodeError(#[source] Box<dyn std::error::Error + Send + Sync>);

impl DecodeError {
    /// Wrap the underlying decoder error.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e)
    }
}

/// Converts a text payload into a typed value.
pub trait Decoder: Send + Sync {
    /// Decode `text` into `T`, failing if it does not match the shape of `T`.
    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, DecodeError>;
}

/// [`Decoder`] for JSON payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, DecodeError> {
        Ok(serde_json::from_str(text)?)
    }
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{require_non_blank, Error, Result};

const JSON_MIME_TYPE: &str = "application/json";
const XML_MIME_TYPE: &str = "application/xml";
const JAVASCRIPT_MIME_TYPE: &str = "text/javascript";

/// MIME type attached to outgoing requests.
///
/// Common types have named constructors, anything else goes through [`ContentType::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentType(String);

impl ContentType {
    /// Create a content type from an arbitrary MIME string, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        require_non_blank("content_type", &value)?;
        Ok(Self(value))
    }

    /// `application/json`
    pub fn json() -> Self {
        Self(JSON_MIME_TYPE.to_string())
    }

    /// `application/xml`
    pub fn xml() -> Self {
        Self(XML_MIME_TYPE.to_string())
    }

    /// `text/javascript`
    pub fn javascript() -> Self {
        Self(JAVASCRIPT_MIME_TYPE.to_string())
    }

    /// The MIME type string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ContentType {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for ContentType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        content_type.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_constructors() {
        assert_eq!(ContentType::json().as_str(), "application/json");
        assert_eq!(ContentType::xml().as_str(), "application/xml");
        assert_eq!(ContentType::javascript().as_str(), "text/javascript");
    }

    #[test]
    fn test_custom_mime_type() {
        let content_type = ContentType::new("custom/mime-type").unwrap();
        assert_eq!(content_type.as_str(), "custom/mime-type");
        assert_eq!(content_type.to_string(), "custom/mime-type");
    }

    #[test]
    fn test_blank_custom_mime_type_fails() {
        for value in ["", " "] {
            assert!(ContentType::new(value).unwrap_err().is_invalid_argument());
            assert!(value.parse::<ContentType>().is_err());
        }
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&ContentType::xml()).unwrap();
        assert_eq!(json, r#""application/xml""#);

        let parsed: ContentType = serde_json::from_str(r#""text/csv""#).unwrap();
        assert_eq!(parsed.as_str(), "text/csv");
        assert!(serde_json::from_str::<ContentType>(r#""""#).is_err());
    }
}

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::GatewayError;

/// Parsed response body.
///
/// JSON when the response `content-type` contains `application/json`,
/// raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parse `body` according to the response content type.
    ///
    /// A JSON content type with an empty or malformed body degrades to text so
    /// that error responses are never lost to a parse failure.
    pub fn parse(content_type: &str, body: &[u8]) -> Self {
        if content_type.contains("application/json") {
            if let Ok(value) = serde_json::from_slice::<Value>(body) {
                return ResponseBody::Json(value);
            }
            tracing::debug!(len = body.len(), "JSON content type with unparsable body");
        }
        ResponseBody::Text(String::from_utf8_lossy(body).into_owned())
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ResponseBody::Json(_))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(v) => Some(v),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(s) => Some(s),
            ResponseBody::Json(_) => None,
        }
    }

    /// Decode a JSON body into `T`; a text body is a decoding error.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, GatewayError> {
        match self {
            ResponseBody::Json(value) => serde_json::from_value(value).map_err(|e| {
                GatewayError::Decode(format!(
                    "expected {}: {}",
                    std::any::type_name::<T>(),
                    e
                ))
            }),
            ResponseBody::Text(text) => Err(GatewayError::Decode(format!(
                "expected JSON, got non-JSON content ({} bytes)",
                text.len()
            ))),
        }
    }

    /// Body as text; JSON is re-serialized.
    pub fn into_text(self) -> String {
        match self {
            ResponseBody::Text(s) => s,
            ResponseBody::Json(v) => v.to_string(),
        }
    }
}

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{DecodeError, SchemaMismatch};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response{}: {source}", .path.as_deref().map(|p| format!(" at `{p}`")).unwrap_or_default())]
    Json {
        path: Option<String>,
        #[source]
        source: serde_json::Error,
    },

    #[error("response does not match its schema: {0}")]
    SchemaMismatch(SchemaMismatch),

    #[error("empty response body")]
    EmptyBody,
}

impl From<DecodeError> for TransportError {
    fn from(value: DecodeError) -> Self {
        match value {
            DecodeError::SchemaMismatch(mismatch) => Self::SchemaMismatch(mismatch),
            DecodeError::Json { path, source } => Self::Json { path, source },
        }
    }
}

/// Serialize a validated request into the JSON body sent on the wire.
pub fn encode_request_json<T: Serialize + ?Sized>(request: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(request)
}

/// Decode a 2xx response body into the endpoint's response type.
pub fn decode_response_json<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    if body.trim().is_empty() {
        return Err(TransportError::EmptyBody);
    }
    Ok(crate::domain::decode(body)?)
}

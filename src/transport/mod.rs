//! Transport layer: JSON wire-format details (serialization/deserialization).

mod json;
mod service_exception;

pub use json::{TransportError, decode_response_json, encode_request_json};
pub use service_exception::decode_service_exception;

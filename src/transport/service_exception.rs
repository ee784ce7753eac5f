use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::ServiceException;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope {
    request_error: RequestErrorJson,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestErrorJson {
    service_exception: ServiceExceptionJson,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceExceptionJson {
    #[serde(default)]
    message_id: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    validation_errors: Option<BTreeMap<String, TransportMessages>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TransportMessages {
    Many(Vec<String>),
    One(String),
}

impl TransportMessages {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }
}

impl From<ServiceExceptionJson> for ServiceException {
    fn from(value: ServiceExceptionJson) -> Self {
        Self {
            message_id: value.message_id,
            text: value.text,
            validation_errors: value
                .validation_errors
                .unwrap_or_default()
                .into_iter()
                .map(|(field, messages)| (field, messages.into_vec()))
                .collect(),
        }
    }
}

/// Extract provider diagnostics from an error response body.
///
/// Accepts the `{"requestError":{"serviceException":{...}}}` envelope as well
/// as a flat `{"messageId":...,"text":...}` object. Returns `None` when the
/// body carries no message id, text, or validation errors.
pub fn decode_service_exception(body: &str) -> Option<ServiceException> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let exception = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.request_error.service_exception,
        Err(_) => serde_json::from_str::<ServiceExceptionJson>(body).ok()?,
    };

    let exception = ServiceException::from(exception);
    if exception.message_id.is_none()
        && exception.text.is_none()
        && exception.validation_errors.is_empty()
    {
        return None;
    }
    Some(exception)
}

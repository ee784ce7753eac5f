//! Client layer: validates requests, calls the transport, and maps HTTP statuses to errors.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{
    AudioContent, BulkMessageInfo, ContactsContent, DocumentContent, ImageContent,
    InteractiveButtonsContent, InteractiveListContent, LocationContent, MessageInfo,
    PushConfiguration, PushConfigurationResponse, RcsBulkMessages, RcsMessage,
    RcsMessageResponse, SchemaMismatch, ServiceException, StickerContent, TextContent, Validate,
    ValidationError, ValidationResult, VideoContent, WhatsAppBulkMessage, WhatsAppMessage,
};
use crate::transport::TransportError;

const DEFAULT_BASE_URL: &str = "https://api.infobip.com";
const BASE_URL_ENV: &str = "INFOBIP_BASE_URL";
const API_KEY_ENV: &str = "INFOBIP_API_KEY";
const JSON: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Vec<u8>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.post(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(*name, value);
            }
            let response = builder.body(request.body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Credentials sent in the `Authorization` header.
#[derive(Clone)]
pub enum Auth {
    /// `App <api key>`.
    ApiKey(String),
    /// `Basic <base64(username:password)>`.
    Basic { username: String, password: String },
    /// `IBSSO <token>`.
    Ibsso(String),
    /// `Bearer <token>` for OAuth 2.0 access tokens.
    Bearer(String),
}

impl Auth {
    /// Create [`Auth::ApiKey`] and validate that the key is non-empty after trimming.
    pub fn api_key(key: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::ApiKey(non_empty("api_key", key)?))
    }

    /// Create [`Auth::Basic`] and validate that both parts are non-empty.
    pub fn basic(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::Basic {
            username: non_empty("username", username)?,
            password: non_empty("password", password)?,
        })
    }

    pub fn ibsso(token: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::Ibsso(non_empty("ibsso_token", token)?))
    }

    pub fn bearer(token: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::Bearer(non_empty("access_token", token)?))
    }

    fn header_value(&self) -> String {
        match self {
            Self::ApiKey(key) => format!("App {key}"),
            Self::Basic { username, password } => {
                format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
            }
            Self::Ibsso(token) => format!("IBSSO {token}"),
            Self::Bearer(token) => format!("Bearer {token}"),
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::Ibsso(_) => f.write_str("Ibsso(***)"),
            Self::Bearer(_) => f.write_str("Bearer(***)"),
        }
    }
}

fn non_empty(field: &'static str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into().trim().to_owned();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`InfobipClient`].
///
/// Local failures (`RequestInvalid`, `Serialize`) are raised before any
/// network call. Remote rejections are split by HTTP status so callers can
/// branch without inspecting status codes.
pub enum InfobipError {
    /// The request failed client-side validation; nothing was sent.
    #[error("request is invalid: {0}")]
    RequestInvalid(ValidationResult),

    /// HTTP 400.
    #[error("bad request: {0}")]
    BadRequest(ServiceException),

    /// HTTP 401.
    #[error("unauthorized: {0}")]
    Unauthorized(ServiceException),

    /// HTTP 403.
    #[error("forbidden: {0}")]
    Forbidden(ServiceException),

    /// HTTP 429.
    #[error("too many requests: {0}")]
    TooManyRequests(ServiceException),

    /// Any other non-2xx status.
    #[error("unexpected HTTP status: {status}")]
    Api { status: u16, body: Option<String> },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The request could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Response body could not be parsed as the expected type.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A polymorphic document carried an unknown or missing discriminator.
    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatch),

    #[error("invalid base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    /// One of the value constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("environment variable {name} is not set")]
    MissingEnv { name: &'static str },
}

impl InfobipError {
    /// HTTP status of a remote rejection, if this error is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::TooManyRequests(_) => Some(429),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Provider diagnostics attached to a remote rejection.
    pub fn service_exception(&self) -> Option<&ServiceException> {
        match self {
            Self::BadRequest(exception)
            | Self::Unauthorized(exception)
            | Self::Forbidden(exception)
            | Self::TooManyRequests(exception) => Some(exception),
            _ => None,
        }
    }
}

/// A request that can be sent with [`InfobipClient::send`].
///
/// The request type selects the endpoint path and the response type.
pub trait ApiRequest: Validate + Serialize {
    type Response: DeserializeOwned;

    /// Endpoint path relative to the base URL.
    const PATH: &'static str;
}

macro_rules! api_request {
    ($($request:ty => $path:literal, $response:ty;)+) => {
        $(
            impl ApiRequest for $request {
                type Response = $response;
                const PATH: &'static str = $path;
            }
        )+
    };
}

api_request! {
    WhatsAppMessage<TextContent> => "/whatsapp/1/message/text", MessageInfo;
    WhatsAppMessage<DocumentContent> => "/whatsapp/1/message/document", MessageInfo;
    WhatsAppMessage<ImageContent> => "/whatsapp/1/message/image", MessageInfo;
    WhatsAppMessage<AudioContent> => "/whatsapp/1/message/audio", MessageInfo;
    WhatsAppMessage<VideoContent> => "/whatsapp/1/message/video", MessageInfo;
    WhatsAppMessage<StickerContent> => "/whatsapp/1/message/sticker", MessageInfo;
    WhatsAppMessage<LocationContent> => "/whatsapp/1/message/location", MessageInfo;
    WhatsAppMessage<ContactsContent> => "/whatsapp/1/message/contact", MessageInfo;
    WhatsAppMessage<InteractiveButtonsContent> => "/whatsapp/1/message/interactive/buttons", MessageInfo;
    WhatsAppMessage<InteractiveListContent> => "/whatsapp/1/message/interactive/list", MessageInfo;
    WhatsAppBulkMessage => "/whatsapp/1/message/template", BulkMessageInfo;
    RcsMessage => "/ott/rcs/1/message", RcsMessageResponse;
    RcsBulkMessages => "/ott/rcs/1/message/bulk", RcsMessageResponse;
    PushConfiguration => "/webrtc/1/webrtc-push-config", PushConfigurationResponse;
}

#[derive(Debug, Clone)]
/// Builder for [`InfobipClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct InfobipClientBuilder {
    auth: Auth,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl InfobipClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the account-specific base URL, e.g. `xxxxx.api.infobip.com`.
    ///
    /// A missing scheme defaults to `https://`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`InfobipClient`].
    pub fn build(self) -> Result<InfobipClient, InfobipError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| InfobipError::Transport(Box::new(err)))?;

        Ok(InfobipClient {
            auth: self.auth,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_base_url(value: &str) -> Result<String, InfobipError> {
    let trimmed = value.trim();
    let invalid = |reason: String| InfobipError::InvalidBaseUrl {
        value: value.to_owned(),
        reason,
    };
    if trimmed.is_empty() {
        return Err(invalid("empty".to_owned()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };
    let url = Url::parse(&candidate).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_owned()));
    }

    Ok(url.as_str().trim_end_matches('/').to_owned())
}

#[derive(Clone)]
/// High-level Infobip client.
///
/// Every call validates the request locally, posts it as JSON to the
/// endpoint selected by its type, and maps the HTTP status to a result.
/// Calls are never retried.
pub struct InfobipClient {
    auth: Auth,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for InfobipClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfobipClient")
            .field("auth", &self.auth)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl InfobipClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`InfobipClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: Auth) -> InfobipClientBuilder {
        InfobipClientBuilder::new(auth)
    }

    /// Build a client from `INFOBIP_API_KEY` and, if set, `INFOBIP_BASE_URL`.
    pub fn from_env() -> Result<Self, InfobipError> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| InfobipError::MissingEnv { name: API_KEY_ENV })?;
        let mut builder = Self::builder(Auth::api_key(key)?);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    /// Base URL all endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate and send `request` to its endpoint.
    ///
    /// Errors:
    /// - [`InfobipError::RequestInvalid`] when validation fails; no HTTP call is made,
    /// - [`InfobipError::BadRequest`], [`InfobipError::Unauthorized`],
    ///   [`InfobipError::Forbidden`], [`InfobipError::TooManyRequests`] for
    ///   400/401/403/429,
    /// - [`InfobipError::Api`] for any other non-2xx status,
    /// - [`InfobipError::SchemaMismatch`] when a discriminator in the response
    ///   body is unknown or missing; [`InfobipError::Parse`] for other body errors.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, InfobipError> {
        let validation = request.validation_result();
        if !validation.is_valid() {
            debug!(
                "rejecting request to {} locally: {} violation(s)",
                R::PATH,
                validation.len()
            );
            return Err(InfobipError::RequestInvalid(validation));
        }

        let body = crate::transport::encode_request_json(request).map_err(InfobipError::Serialize)?;
        let url = format!("{}{}", self.base_url, R::PATH);
        debug!("POST {url} ({} bytes)", body.len());

        let response = self
            .http
            .post_json(HttpRequest {
                url,
                headers: vec![
                    ("Authorization", self.auth.header_value()),
                    ("Content-Type", JSON.to_owned()),
                    ("Accept", JSON.to_owned()),
                ],
                body,
            })
            .await
            .map_err(InfobipError::Transport)?;

        if !(200..=299).contains(&response.status) {
            warn!("{} responded with HTTP {}", R::PATH, response.status);
            return Err(classify_failure(response));
        }

        crate::transport::decode_response_json(&response.body).map_err(decode_failure)
    }
}

fn decode_failure(err: TransportError) -> InfobipError {
    match err {
        TransportError::SchemaMismatch(mismatch) => InfobipError::SchemaMismatch(mismatch),
        other => InfobipError::Parse(Box::new(other)),
    }
}

fn classify_failure(response: HttpResponse) -> InfobipError {
    let HttpResponse { status, body } = response;
    let exception = match status {
        400 | 401 | 403 | 429 => {
            crate::transport::decode_service_exception(&body).unwrap_or_default()
        }
        _ => {
            let body = if body.trim().is_empty() { None } else { Some(body) };
            return InfobipError::Api { status, body };
        }
    };
    match status {
        400 => InfobipError::BadRequest(exception),
        401 => InfobipError::Unauthorized(exception),
        403 => InfobipError::Forbidden(exception),
        _ => InfobipError::TooManyRequests(exception),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{
        Contact, ContactName, IosPushConfig, RcsContent, StatusGroup, TemplateContent,
        TemplateData,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<HttpRequest>,
        response_status: u16,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().requests.len()
        }

        fn last_request(&self) -> HttpRequest {
            self.state.lock().unwrap().requests.last().cloned().unwrap()
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json(
            &self,
            request: HttpRequest,
        ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push(request);
                    (state.response_status, state.response_body.clone())
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn make_client(auth: Auth, transport: FakeTransport) -> InfobipClient {
        InfobipClient {
            auth,
            base_url: "https://example.invalid".to_owned(),
            http: Arc::new(transport),
        }
    }

    fn contacts_request(from: &str) -> WhatsAppMessage<ContactsContent> {
        let contact = Contact::new(ContactName::new("First name", "FirstName LastName"));
        WhatsAppMessage::new(from, "447860099300", ContactsContent::new(vec![contact]))
    }

    const MESSAGE_INFO: &str = r#"
    {
      "to": "447860099300",
      "messageCount": 1,
      "messageId": "a28dd97c-1ffb-4fcf-99f1-0b557ed381da",
      "status": {
        "groupId": 1,
        "groupName": "PENDING",
        "id": 7,
        "name": "PENDING_ENROUTE",
        "description": "Message sent to next instance"
      }
    }
    "#;

    #[tokio::test]
    async fn invalid_sender_is_rejected_without_http_call() {
        let transport = FakeTransport::new(200, MESSAGE_INFO);
        let client = make_client(Auth::api_key("key").unwrap(), transport.clone());

        let err = client.send(&contacts_request("")).await.unwrap_err();
        match err {
            InfobipError::RequestInvalid(result) => assert!(result.contains_path("From")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn oversized_callback_data_is_rejected_without_http_call() {
        let transport = FakeTransport::new(200, MESSAGE_INFO);
        let client = make_client(Auth::api_key("key").unwrap(), transport.clone());

        let request = contacts_request("447860099299").with_callback_data("x".repeat(4001));
        let err = client.send(&request).await.unwrap_err();
        match err {
            InfobipError::RequestInvalid(result) => {
                assert_eq!(result.paths().collect::<Vec<_>>(), vec!["CallbackData"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn success_returns_parsed_body() {
        let transport = FakeTransport::new(200, MESSAGE_INFO);
        let client = make_client(Auth::api_key("test_key").unwrap(), transport.clone());

        let response = client.send(&contacts_request("447860099299")).await.unwrap();
        let expected: MessageInfo = serde_json::from_str(MESSAGE_INFO).unwrap();
        assert_eq!(response, expected);
        assert_eq!(response.status.group(), Some(StatusGroup::Pending));

        let request = transport.last_request();
        assert_eq!(request.url, "https://example.invalid/whatsapp/1/message/contact");
        assert_eq!(header(&request, "Authorization"), Some("App test_key"));
        assert_eq!(header(&request, "Content-Type"), Some("application/json"));
        assert_eq!(header(&request, "Accept"), Some("application/json"));

        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body["from"], "447860099299");
        assert_eq!(body["content"]["contacts"][0]["name"]["firstName"], "First name");
    }

    #[tokio::test]
    async fn forbidden_carries_provider_diagnostics() {
        let transport = FakeTransport::new(403, r#"{"messageId":"M1","text":"blocked"}"#);
        let client = make_client(Auth::api_key("key").unwrap(), transport.clone());

        let err = client.send(&contacts_request("447860099299")).await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        match err {
            InfobipError::Forbidden(exception) => {
                assert_eq!(exception.message_id.as_deref(), Some("M1"));
                assert_eq!(exception.text.as_deref(), Some("blocked"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn bad_request_carries_validation_errors() {
        let json = r#"
        {
          "requestError": {
            "serviceException": {
              "messageId": "BAD_REQUEST",
              "text": "Bad request",
              "validationErrors": {"to": ["invalid destination"]}
            }
          }
        }
        "#;
        let transport = FakeTransport::new(400, json);
        let client = make_client(Auth::api_key("key").unwrap(), transport);

        let err = client.send(&contacts_request("447860099299")).await.unwrap_err();
        let exception = err.service_exception().unwrap();
        assert_eq!(exception.message_id.as_deref(), Some("BAD_REQUEST"));
        assert_eq!(
            exception.validation_errors.get("to"),
            Some(&vec!["invalid destination".to_owned()])
        );
        assert!(matches!(err, InfobipError::BadRequest(_)));
    }

    #[tokio::test]
    async fn bad_request_keeps_validation_errors_without_message() {
        let json = r#"{"requestError":{"serviceException":{"validationErrors":{"to":["invalid destination"]}}}}"#;
        let client = make_client(Auth::api_key("key").unwrap(), FakeTransport::new(400, json));

        let err = client.send(&contacts_request("447860099299")).await.unwrap_err();
        match err {
            InfobipError::BadRequest(exception) => {
                assert_eq!(exception.message_id, None);
                assert!(exception.validation_errors.contains_key("to"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn every_request_type_has_its_endpoint() {
        let paths = [
            (<WhatsAppMessage<TextContent> as ApiRequest>::PATH, "/whatsapp/1/message/text"),
            (<WhatsAppMessage<DocumentContent> as ApiRequest>::PATH, "/whatsapp/1/message/document"),
            (<WhatsAppMessage<ImageContent> as ApiRequest>::PATH, "/whatsapp/1/message/image"),
            (<WhatsAppMessage<AudioContent> as ApiRequest>::PATH, "/whatsapp/1/message/audio"),
            (<WhatsAppMessage<VideoContent> as ApiRequest>::PATH, "/whatsapp/1/message/video"),
            (<WhatsAppMessage<StickerContent> as ApiRequest>::PATH, "/whatsapp/1/message/sticker"),
            (<WhatsAppMessage<LocationContent> as ApiRequest>::PATH, "/whatsapp/1/message/location"),
            (<WhatsAppMessage<ContactsContent> as ApiRequest>::PATH, "/whatsapp/1/message/contact"),
            (
                <WhatsAppMessage<InteractiveButtonsContent> as ApiRequest>::PATH,
                "/whatsapp/1/message/interactive/buttons",
            ),
            (
                <WhatsAppMessage<InteractiveListContent> as ApiRequest>::PATH,
                "/whatsapp/1/message/interactive/list",
            ),
            (<WhatsAppBulkMessage as ApiRequest>::PATH, "/whatsapp/1/message/template"),
            (<RcsMessage as ApiRequest>::PATH, "/ott/rcs/1/message"),
            (<RcsBulkMessages as ApiRequest>::PATH, "/ott/rcs/1/message/bulk"),
            (<PushConfiguration as ApiRequest>::PATH, "/webrtc/1/webrtc-push-config"),
        ];
        for (actual, expected) in paths {
            assert_eq!(actual, expected);
        }
    }

    #[tokio::test]
    async fn rcs_bulk_is_posted_to_bulk_endpoint() {
        let json = r#"{"messages":[{"messageId":"R1"},{"messageId":"R2"}]}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(Auth::api_key("key").unwrap(), transport.clone());

        let request = RcsBulkMessages::new(vec![
            RcsMessage::new(None, "447860099300", RcsContent::text("one")),
            RcsMessage::new(None, "447860099301", RcsContent::text("two")),
        ]);
        let response = client.send(&request).await.unwrap();
        assert_eq!(response.messages.len(), 2);

        let sent = transport.last_request();
        assert_eq!(sent.url, "https://example.invalid/ott/rcs/1/message/bulk");
        let body: serde_json::Value = serde_json::from_slice(&sent.body).unwrap();
        assert_eq!(body["messages"][1]["content"]["type"], "TEXT");
        assert_eq!(body["messages"][1]["to"], "447860099301");
    }

    #[tokio::test]
    async fn auth_and_throttling_statuses_map_to_distinct_errors() {
        let client = make_client(Auth::api_key("key").unwrap(), FakeTransport::new(401, ""));
        let err = client.send(&contacts_request("447860099299")).await.unwrap_err();
        assert!(matches!(err, InfobipError::Unauthorized(ref e) if e.message_id.is_none()));

        let client = make_client(
            Auth::api_key("key").unwrap(),
            FakeTransport::new(429, r#"{"messageId":"TOO_MANY_REQUESTS","text":"slow down"}"#),
        );
        let err = client.send(&contacts_request("447860099299")).await.unwrap_err();
        assert!(matches!(err, InfobipError::TooManyRequests(_)));
    }

    #[tokio::test]
    async fn other_statuses_map_to_api_error() {
        let client = make_client(Auth::api_key("key").unwrap(), FakeTransport::new(500, "oops"));
        let err = client.send(&contacts_request("447860099299")).await.unwrap_err();
        assert!(matches!(
            err,
            InfobipError::Api {
                status: 500,
                body: Some(_)
            }
        ));

        let client = make_client(Auth::api_key("key").unwrap(), FakeTransport::new(503, "  "));
        let err = client.send(&contacts_request("447860099299")).await.unwrap_err();
        assert!(matches!(
            err,
            InfobipError::Api {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn malformed_success_body_maps_to_parse_error() {
        let client = make_client(
            Auth::api_key("key").unwrap(),
            FakeTransport::new(200, "{ not json }"),
        );
        let err = client.send(&contacts_request("447860099299")).await.unwrap_err();
        assert!(matches!(err, InfobipError::Parse(_)));
    }

    #[test]
    fn nested_unknown_tag_surfaces_as_schema_mismatch() {
        let json = r#"
        {
          "from": "447860099299",
          "to": "447860099300",
          "content": {
            "body": {"text": "pick one"},
            "action": {"buttons": [{"type": "REPLY", "id": "1", "title": "Yes"}]},
            "header": {"type": "AUDIO", "mediaUrl": "https://example.com/a.mp3"}
          }
        }
        "#;
        let err = crate::transport::decode_response_json::<
            WhatsAppMessage<InteractiveButtonsContent>,
        >(json)
        .map_err(decode_failure)
        .unwrap_err();
        assert!(err.to_string().contains("`content.header.type`"));
        let InfobipError::SchemaMismatch(mismatch) = err else {
            panic!("expected a schema mismatch, got {err:?}");
        };
        assert_eq!(mismatch.path(), Some("content.header.type"));
        assert!(matches!(
            mismatch.root_cause(),
            SchemaMismatch::UnknownDiscriminator { field: "type", .. }
        ));
    }

    #[tokio::test]
    async fn request_type_selects_endpoint() {
        let transport = FakeTransport::new(200, r#"{"messages":[],"bulkId":"B1"}"#);
        let client = make_client(Auth::bearer("token").unwrap(), transport.clone());
        let template = WhatsAppMessage::new(
            "447860099299",
            "447860099300",
            TemplateContent::new("welcome", TemplateData::new(Vec::new()), "en"),
        );
        let response = client
            .send(&WhatsAppBulkMessage::new(vec![template]))
            .await
            .unwrap();
        assert_eq!(response.bulk_id.as_deref(), Some("B1"));
        let request = transport.last_request();
        assert_eq!(request.url, "https://example.invalid/whatsapp/1/message/template");
        assert_eq!(header(&request, "Authorization"), Some("Bearer token"));

        let transport = FakeTransport::new(200, r#"{"messages":[{"messageId":"R1"}]}"#);
        let client = make_client(Auth::ibsso("sso").unwrap(), transport.clone());
        let message = RcsMessage::new(None, "447860099300", RcsContent::text("hello"));
        let response = client.send(&message).await.unwrap();
        assert_eq!(response.messages[0].message_id.as_deref(), Some("R1"));
        let request = transport.last_request();
        assert_eq!(request.url, "https://example.invalid/ott/rcs/1/message");
        assert_eq!(header(&request, "Authorization"), Some("IBSSO sso"));

        let transport = FakeTransport::new(200, r#"{"id":"P1","applicationId":"app"}"#);
        let client = make_client(Auth::basic("user", "pass").unwrap(), transport.clone());
        let config = PushConfiguration::new("app").with_ios(IosPushConfig {
            certificate_file_name: "cert.p12".to_owned(),
            certificate_file_content: "AAAA".to_owned(),
            private_key_password: None,
        });
        let response = client.send(&config).await.unwrap();
        assert_eq!(response.id, "P1");
        let request = transport.last_request();
        assert_eq!(request.url, "https://example.invalid/webrtc/1/webrtc-push-config");
        assert_eq!(header(&request, "Authorization"), Some("Basic dXNlcjpwYXNz"));
    }

    #[test]
    fn auth_constructors_validate_inputs() {
        assert!(Auth::api_key("   ").is_err());
        assert!(Auth::basic("", "pass").is_err());
        assert!(Auth::basic("user", "").is_err());
        assert!(Auth::ibsso("").is_err());
        assert!(Auth::bearer(" ").is_err());
    }

    #[test]
    fn auth_debug_hides_secrets() {
        let rendered = format!("{:?}", Auth::basic("user", "hunter2").unwrap());
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("hunter2"));
        assert!(!format!("{:?}", Auth::api_key("secret").unwrap()).contains("secret"));
    }

    #[test]
    fn builder_normalizes_base_url() {
        let client = InfobipClient::builder(Auth::api_key("key").unwrap())
            .base_url("xxxxx.api.infobip.com/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://xxxxx.api.infobip.com");

        let client = InfobipClient::builder(Auth::api_key("key").unwrap())
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(5))
            .user_agent("test")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");

        assert_eq!(
            InfobipClient::new(Auth::api_key("key").unwrap()).base_url(),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn builder_rejects_bad_base_url() {
        for value in ["", "ftp://example.com", "https://"] {
            let err = InfobipClient::builder(Auth::api_key("key").unwrap())
                .base_url(value)
                .build()
                .unwrap_err();
            assert!(
                matches!(err, InfobipError::InvalidBaseUrl { .. }),
                "{value:?} gave {err:?}"
            );
        }
    }
}

//! RCS messages: content, suggestions, and SMS failover.

use serde::{Deserialize, Serialize};

use crate::domain::content::{LATITUDE, LONGITUDE};
use crate::domain::discriminator::discriminated;
use crate::domain::request::{CALLBACK_DATA, MESSAGE_ID, NOTIFY_URL, PARTY};
use crate::domain::validation::{Rule, Validate, Walker};

const SUGGESTION_TEXT: &[Rule] = &[Rule::Required, Rule::Length { min: 1, max: 25 }];
const POSTBACK_DATA: &[Rule] = &[Rule::Required, Rule::Length { min: 1, max: 2048 }];
const FILE_URL: &[Rule] = &[Rule::Required, Rule::Length { min: 1, max: 1000 }];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidityPeriodTimeUnit {
    Seconds,
    #[default]
    Minutes,
    Hours,
}

/// A single RCS message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcsMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_period_time_unit: Option<ValidityPeriodTimeUnit>,
    pub content: RcsContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_failover: Option<SmsFailover>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl RcsMessage {
    pub fn new(from: Option<String>, to: impl Into<String>, content: RcsContent) -> Self {
        Self {
            from,
            to: to.into(),
            validity_period: None,
            validity_period_time_unit: None,
            content,
            sms_failover: None,
            notify_url: None,
            callback_data: None,
            message_id: None,
        }
    }

    #[must_use]
    pub fn with_validity(mut self, period: u32, unit: ValidityPeriodTimeUnit) -> Self {
        self.validity_period = Some(period);
        self.validity_period_time_unit = Some(unit);
        self
    }

    #[must_use]
    pub fn with_sms_failover(mut self, failover: SmsFailover) -> Self {
        self.sms_failover = Some(failover);
        self
    }

    #[must_use]
    pub fn with_notify_url(mut self, notify_url: impl Into<String>) -> Self {
        self.notify_url = Some(notify_url.into());
        self
    }

    #[must_use]
    pub fn with_callback_data(mut self, callback_data: impl Into<String>) -> Self {
        self.callback_data = Some(callback_data.into());
        self
    }

    #[must_use]
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }
}

impl Validate for RcsMessage {
    fn validate(&self, walker: &mut Walker) {
        walker.optional_text("From", self.from.as_deref(), &[Rule::Length { min: 1, max: 24 }]);
        walker.text("To", &self.to, PARTY);
        walker.optional_text("NotifyUrl", self.notify_url.as_deref(), NOTIFY_URL);
        walker.optional_text("CallbackData", self.callback_data.as_deref(), CALLBACK_DATA);
        walker.optional_text("MessageId", self.message_id.as_deref(), MESSAGE_ID);
        walker.nested("Content", &self.content);
        walker.optional_nested("SmsFailover", self.sms_failover.as_ref(), &[]);
    }
}

/// A batch of RCS messages sent in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcsBulkMessages {
    pub messages: Vec<RcsMessage>,
}

impl RcsBulkMessages {
    pub fn new(messages: Vec<RcsMessage>) -> Self {
        Self { messages }
    }
}

impl Validate for RcsBulkMessages {
    fn validate(&self, walker: &mut Walker) {
        walker.list("Messages", &self.messages, &[Rule::Required]);
    }
}

/// Text sent over SMS when RCS delivery fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsFailover {
    pub from: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_period_time_unit: Option<ValidityPeriodTimeUnit>,
}

impl SmsFailover {
    pub fn new(from: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            text: text.into(),
            validity_period: None,
            validity_period_time_unit: None,
        }
    }
}

impl Validate for SmsFailover {
    fn validate(&self, walker: &mut Walker) {
        walker.text("From", &self.from, &[Rule::Required]);
        walker.text("Text", &self.text, &[Rule::Required]);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcsText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl Validate for RcsText {
    fn validate(&self, walker: &mut Walker) {
        walker.text(
            "Text",
            &self.text,
            &[Rule::Required, Rule::Length { min: 1, max: 1000 }],
        );
        walker.list("Suggestions", &self.suggestions, &[Rule::Count { min: 0, max: 11 }]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcsResource {
    pub url: String,
}

impl RcsResource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Validate for RcsResource {
    fn validate(&self, walker: &mut Walker) {
        walker.text("Url", &self.url, FILE_URL);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcsFile {
    pub file: RcsResource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<RcsResource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl Validate for RcsFile {
    fn validate(&self, walker: &mut Walker) {
        walker.nested("File", &self.file);
        walker.optional_nested("Thumbnail", self.thumbnail.as_ref(), &[]);
        walker.list("Suggestions", &self.suggestions, &[Rule::Count { min: 0, max: 11 }]);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardOrientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardAlignment {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaHeight {
    Short,
    Medium,
    Tall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardWidth {
    Small,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMedia {
    pub file: RcsResource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<RcsResource>,
    pub height: MediaHeight,
}

impl Validate for CardMedia {
    fn validate(&self, walker: &mut Walker) {
        walker.nested("File", &self.file);
        walker.optional_nested("Thumbnail", self.thumbnail.as_ref(), &[]);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<CardMedia>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl Validate for CardContent {
    fn validate(&self, walker: &mut Walker) {
        walker.optional_text(
            "Title",
            self.title.as_deref(),
            &[Rule::Length { min: 1, max: 200 }],
        );
        walker.optional_text(
            "Description",
            self.description.as_deref(),
            &[Rule::Length { min: 1, max: 2000 }],
        );
        walker.optional_nested("Media", self.media.as_ref(), &[]);
        walker.list("Suggestions", &self.suggestions, &[Rule::Count { min: 0, max: 4 }]);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcsCard {
    pub orientation: CardOrientation,
    pub alignment: CardAlignment,
    pub content: CardContent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl Validate for RcsCard {
    fn validate(&self, walker: &mut Walker) {
        walker.nested("Content", &self.content);
        walker.list("Suggestions", &self.suggestions, &[Rule::Count { min: 0, max: 11 }]);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcsCarousel {
    pub card_width: CardWidth,
    pub contents: Vec<CardContent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl Validate for RcsCarousel {
    fn validate(&self, walker: &mut Walker) {
        walker.list(
            "Contents",
            &self.contents,
            &[Rule::Required, Rule::Count { min: 2, max: 10 }],
        );
        walker.list("Suggestions", &self.suggestions, &[Rule::Count { min: 0, max: 11 }]);
    }
}

/// RCS message content, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RcsContent {
    #[serde(rename = "TEXT")]
    Text(RcsText),
    #[serde(rename = "FILE")]
    File(RcsFile),
    #[serde(rename = "CARD")]
    Card(RcsCard),
    #[serde(rename = "CAROUSEL")]
    Carousel(RcsCarousel),
}

discriminated!(RcsContent, "type" {
    "TEXT" => Text,
    "FILE" => File,
    "CARD" => Card,
    "CAROUSEL" => Carousel,
});

impl RcsContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(RcsText {
            text: text.into(),
            suggestions: Vec::new(),
        })
    }

    pub fn file(url: impl Into<String>) -> Self {
        Self::File(RcsFile {
            file: RcsResource::new(url),
            thumbnail: None,
            suggestions: Vec::new(),
        })
    }
}

impl Validate for RcsContent {
    fn validate(&self, walker: &mut Walker) {
        match self {
            Self::Text(content) => content.validate(walker),
            Self::File(content) => content.validate(walker),
            Self::Card(content) => content.validate(walker),
            Self::Carousel(content) => content.validate(walker),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplySuggestion {
    pub text: String,
    pub postback_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUrlSuggestion {
    pub text: String,
    pub postback_data: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialPhoneSuggestion {
    pub text: String,
    pub postback_data: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowLocationSuggestion {
    pub text: String,
    pub postback_data: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestLocationSuggestion {
    pub text: String,
    pub postback_data: String,
}

/// Suggested reply or action, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Suggestion {
    #[serde(rename = "REPLY")]
    Reply(ReplySuggestion),
    #[serde(rename = "OPEN_URL")]
    OpenUrl(OpenUrlSuggestion),
    #[serde(rename = "DIAL_PHONE")]
    DialPhone(DialPhoneSuggestion),
    #[serde(rename = "SHOW_LOCATION")]
    ShowLocation(ShowLocationSuggestion),
    #[serde(rename = "REQUEST_LOCATION")]
    RequestLocation(RequestLocationSuggestion),
}

discriminated!(Suggestion, "type" {
    "REPLY" => Reply,
    "OPEN_URL" => OpenUrl,
    "DIAL_PHONE" => DialPhone,
    "SHOW_LOCATION" => ShowLocation,
    "REQUEST_LOCATION" => RequestLocation,
});

impl Suggestion {
    pub fn reply(text: impl Into<String>, postback_data: impl Into<String>) -> Self {
        Self::Reply(ReplySuggestion {
            text: text.into(),
            postback_data: postback_data.into(),
        })
    }

    fn text_and_postback(&self) -> (&str, &str) {
        match self {
            Self::Reply(s) => (&s.text, &s.postback_data),
            Self::OpenUrl(s) => (&s.text, &s.postback_data),
            Self::DialPhone(s) => (&s.text, &s.postback_data),
            Self::ShowLocation(s) => (&s.text, &s.postback_data),
            Self::RequestLocation(s) => (&s.text, &s.postback_data),
        }
    }
}

impl Validate for Suggestion {
    fn validate(&self, walker: &mut Walker) {
        let (text, postback_data) = self.text_and_postback();
        walker.text("Text", text, SUGGESTION_TEXT);
        walker.text("PostbackData", postback_data, POSTBACK_DATA);
        match self {
            Self::OpenUrl(s) => {
                walker.text("Url", &s.url, &[Rule::Required, Rule::Length { min: 1, max: 2048 }]);
            }
            Self::DialPhone(s) => walker.text("PhoneNumber", &s.phone_number, &[Rule::Required]),
            Self::ShowLocation(s) => {
                walker.number("Latitude", Some(s.latitude), LATITUDE);
                walker.number("Longitude", Some(s.longitude), LONGITUDE);
                walker.optional_text(
                    "Label",
                    s.label.as_deref(),
                    &[Rule::Length { min: 1, max: 100 }],
                );
            }
            Self::Reply(_) | Self::RequestLocation(_) => {}
        }
    }
}

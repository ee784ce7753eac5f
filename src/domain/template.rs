//! WhatsApp template messages.
//!
//! Template headers are tagged by `format` rather than `type`.

use serde::{Deserialize, Serialize};

use crate::domain::content::{LATITUDE, LONGITUDE};
use crate::domain::discriminator::discriminated;
use crate::domain::validation::{Rule, Validate, Walker};

const MEDIA_URL: &[Rule] = &[Rule::Required, Rule::Length { min: 1, max: 2048 }];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContent {
    /// Name of an approved template.
    pub template_name: String,
    pub template_data: TemplateData,
    /// Template language code, e.g. `en` or `en_GB`.
    pub language: String,
}

impl TemplateContent {
    pub fn new(
        template_name: impl Into<String>,
        template_data: TemplateData,
        language: impl Into<String>,
    ) -> Self {
        Self {
            template_name: template_name.into(),
            template_data,
            language: language.into(),
        }
    }
}

impl Validate for TemplateContent {
    fn validate(&self, walker: &mut Walker) {
        walker.text(
            "TemplateName",
            &self.template_name,
            &[Rule::Required, Rule::Length { min: 1, max: 512 }],
        );
        walker.text("Language", &self.language, &[Rule::Required]);
        walker.nested("TemplateData", &self.template_data);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub body: TemplateBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<TemplateHeader>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<TemplateButton>,
}

impl TemplateData {
    pub fn new(placeholders: Vec<String>) -> Self {
        Self {
            body: TemplateBody { placeholders },
            header: None,
            buttons: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: TemplateHeader) -> Self {
        self.header = Some(header);
        self
    }

    #[must_use]
    pub fn with_button(mut self, button: TemplateButton) -> Self {
        self.buttons.push(button);
        self
    }
}

impl Validate for TemplateData {
    fn validate(&self, walker: &mut Walker) {
        walker.nested("Body", &self.body);
        walker.optional_nested("Header", self.header.as_ref(), &[]);
        walker.list("Buttons", &self.buttons, &[Rule::Count { min: 0, max: 3 }]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateBody {
    /// Values for `{{1}}`, `{{2}}`, ... in template order.
    pub placeholders: Vec<String>,
}

impl Validate for TemplateBody {
    fn validate(&self, walker: &mut Walker) {
        walker.texts("Placeholders", &self.placeholders, &[], &[Rule::Required]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateTextHeader {
    pub placeholder: String,
}

impl Validate for TemplateTextHeader {
    fn validate(&self, walker: &mut Walker) {
        walker.text("Placeholder", &self.placeholder, &[Rule::Required]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateImageHeader {
    pub media_url: String,
}

impl Validate for TemplateImageHeader {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVideoHeader {
    pub media_url: String,
}

impl Validate for TemplateVideoHeader {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocumentHeader {
    pub media_url: String,
    pub filename: String,
}

impl Validate for TemplateDocumentHeader {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
        walker.text(
            "Filename",
            &self.filename,
            &[Rule::Required, Rule::Length { min: 1, max: 240 }],
        );
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateLocationHeader {
    pub latitude: f64,
    pub longitude: f64,
}

impl Validate for TemplateLocationHeader {
    fn validate(&self, walker: &mut Walker) {
        walker.number("Latitude", Some(self.latitude), LATITUDE);
        walker.number("Longitude", Some(self.longitude), LONGITUDE);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format")]
pub enum TemplateHeader {
    #[serde(rename = "TEXT")]
    Text(TemplateTextHeader),
    #[serde(rename = "IMAGE")]
    Image(TemplateImageHeader),
    #[serde(rename = "VIDEO")]
    Video(TemplateVideoHeader),
    #[serde(rename = "DOCUMENT")]
    Document(TemplateDocumentHeader),
    #[serde(rename = "LOCATION")]
    Location(TemplateLocationHeader),
}

discriminated!(TemplateHeader, "format" {
    "TEXT" => Text,
    "IMAGE" => Image,
    "VIDEO" => Video,
    "DOCUMENT" => Document,
    "LOCATION" => Location,
});

impl Validate for TemplateHeader {
    fn validate(&self, walker: &mut Walker) {
        match self {
            Self::Text(header) => header.validate(walker),
            Self::Image(header) => header.validate(walker),
            Self::Video(header) => header.validate(walker),
            Self::Document(header) => header.validate(walker),
            Self::Location(header) => header.validate(walker),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReplyButton {
    pub parameter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlButton {
    /// Suffix appended to the URL registered with the template.
    pub parameter: String,
}

/// Dynamic part of a template button, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TemplateButton {
    #[serde(rename = "QUICK_REPLY")]
    QuickReply(QuickReplyButton),
    #[serde(rename = "URL")]
    Url(UrlButton),
}

discriminated!(TemplateButton, "type" {
    "QUICK_REPLY" => QuickReply,
    "URL" => Url,
});

impl TemplateButton {
    pub fn quick_reply(parameter: impl Into<String>) -> Self {
        Self::QuickReply(QuickReplyButton {
            parameter: parameter.into(),
        })
    }

    pub fn url(parameter: impl Into<String>) -> Self {
        Self::Url(UrlButton {
            parameter: parameter.into(),
        })
    }
}

impl Validate for TemplateButton {
    fn validate(&self, walker: &mut Walker) {
        match self {
            Self::QuickReply(QuickReplyButton { parameter }) => {
                walker.text(
                    "Parameter",
                    parameter,
                    &[Rule::Required, Rule::Length { min: 1, max: 128 }],
                );
            }
            Self::Url(UrlButton { parameter }) => {
                walker.text("Parameter", parameter, &[Rule::Required]);
            }
        }
    }
}

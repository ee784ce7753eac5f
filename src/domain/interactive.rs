//! WhatsApp interactive messages: reply buttons and lists.
//!
//! Headers and buttons are polymorphic on their `type` field; see
//! [`crate::domain::discriminator`].

use serde::{Deserialize, Serialize};

use crate::domain::discriminator::discriminated;
use crate::domain::validation::{Rule, Validate, Walker};

const HEADER_TEXT: &[Rule] = &[Rule::Required, Rule::Length { min: 1, max: 60 }];
const MEDIA_URL: &[Rule] = &[Rule::Required, Rule::Length { min: 1, max: 2048 }];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveBody {
    pub text: String,
}

impl InteractiveBody {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Validate for InteractiveBody {
    fn validate(&self, walker: &mut Walker) {
        walker.text(
            "Text",
            &self.text,
            &[Rule::Required, Rule::Length { min: 1, max: 1024 }],
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveFooter {
    pub text: String,
}

impl InteractiveFooter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Validate for InteractiveFooter {
    fn validate(&self, walker: &mut Walker) {
        walker.text(
            "Text",
            &self.text,
            &[Rule::Required, Rule::Length { min: 1, max: 60 }],
        );
    }
}

/// Text shown above the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextHeader {
    pub text: String,
}

impl TextHeader {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Validate for TextHeader {
    fn validate(&self, walker: &mut Walker) {
        walker.text("Text", &self.text, HEADER_TEXT);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageHeader {
    pub media_url: String,
}

impl Validate for ImageHeader {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoHeader {
    pub media_url: String,
}

impl Validate for VideoHeader {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub media_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Validate for DocumentHeader {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
        walker.optional_text(
            "Filename",
            self.filename.as_deref(),
            &[Rule::Length { min: 0, max: 240 }],
        );
    }
}

/// Header of a reply-buttons message, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ButtonsHeader {
    #[serde(rename = "TEXT")]
    Text(TextHeader),
    #[serde(rename = "IMAGE")]
    Image(ImageHeader),
    #[serde(rename = "VIDEO")]
    Video(VideoHeader),
    #[serde(rename = "DOCUMENT")]
    Document(DocumentHeader),
}

discriminated!(ButtonsHeader, "type" {
    "TEXT" => Text,
    "IMAGE" => Image,
    "VIDEO" => Video,
    "DOCUMENT" => Document,
});

impl ButtonsHeader {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextHeader::new(text))
    }

    pub fn image(media_url: impl Into<String>) -> Self {
        Self::Image(ImageHeader {
            media_url: media_url.into(),
        })
    }

    pub fn video(media_url: impl Into<String>) -> Self {
        Self::Video(VideoHeader {
            media_url: media_url.into(),
        })
    }

    pub fn document(media_url: impl Into<String>, filename: Option<String>) -> Self {
        Self::Document(DocumentHeader {
            media_url: media_url.into(),
            filename,
        })
    }
}

impl Validate for ButtonsHeader {
    fn validate(&self, walker: &mut Walker) {
        match self {
            Self::Text(header) => header.validate(walker),
            Self::Image(header) => header.validate(walker),
            Self::Video(header) => header.validate(walker),
            Self::Document(header) => header.validate(walker),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyButton {
    /// Payload returned when the button is tapped.
    pub id: String,
    pub title: String,
}

impl Validate for ReplyButton {
    fn validate(&self, walker: &mut Walker) {
        walker.text(
            "Id",
            &self.id,
            &[Rule::Required, Rule::Length { min: 1, max: 256 }],
        );
        walker.text(
            "Title",
            &self.title,
            &[Rule::Required, Rule::Length { min: 1, max: 20 }],
        );
    }
}

/// A button attached to an interactive buttons message, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum InteractiveButton {
    #[serde(rename = "REPLY")]
    Reply(ReplyButton),
}

discriminated!(InteractiveButton, "type" {
    "REPLY" => Reply,
});

impl InteractiveButton {
    pub fn reply(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::Reply(ReplyButton {
            id: id.into(),
            title: title.into(),
        })
    }
}

impl Validate for InteractiveButton {
    fn validate(&self, walker: &mut Walker) {
        match self {
            Self::Reply(button) => button.validate(walker),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonsAction {
    pub buttons: Vec<InteractiveButton>,
}

impl Validate for ButtonsAction {
    fn validate(&self, walker: &mut Walker) {
        walker.list(
            "Buttons",
            &self.buttons,
            &[Rule::Required, Rule::Count { min: 1, max: 3 }],
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveButtonsContent {
    pub body: InteractiveBody,
    pub action: ButtonsAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ButtonsHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<InteractiveFooter>,
}

impl InteractiveButtonsContent {
    pub fn new(body: impl Into<String>, buttons: Vec<InteractiveButton>) -> Self {
        Self {
            body: InteractiveBody::new(body),
            action: ButtonsAction { buttons },
            header: None,
            footer: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, header: ButtonsHeader) -> Self {
        self.header = Some(header);
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(InteractiveFooter::new(footer));
        self
    }
}

impl Validate for InteractiveButtonsContent {
    fn validate(&self, walker: &mut Walker) {
        walker.nested("Body", &self.body);
        walker.nested("Action", &self.action);
        walker.optional_nested("Header", self.header.as_ref(), &[]);
        walker.optional_nested("Footer", self.footer.as_ref(), &[]);
    }
}

/// Header of a list message, tagged by `type`. Lists only support text headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ListHeader {
    #[serde(rename = "TEXT")]
    Text(TextHeader),
}

discriminated!(ListHeader, "type" {
    "TEXT" => Text,
});

impl Validate for ListHeader {
    fn validate(&self, walker: &mut Walker) {
        match self {
            Self::Text(header) => header.validate(walker),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRow {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListRow {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
        }
    }
}

impl Validate for ListRow {
    fn validate(&self, walker: &mut Walker) {
        walker.text(
            "Id",
            &self.id,
            &[Rule::Required, Rule::Length { min: 1, max: 200 }],
        );
        walker.text(
            "Title",
            &self.title,
            &[Rule::Required, Rule::Length { min: 1, max: 24 }],
        );
        walker.optional_text(
            "Description",
            self.description.as_deref(),
            &[Rule::Length { min: 0, max: 72 }],
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSection {
    /// Required when the list has more than one section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub rows: Vec<ListRow>,
}

impl Validate for ListSection {
    fn validate(&self, walker: &mut Walker) {
        walker.optional_text(
            "Title",
            self.title.as_deref(),
            &[Rule::Length { min: 0, max: 24 }],
        );
        walker.list(
            "Rows",
            &self.rows,
            &[Rule::Required, Rule::Count { min: 1, max: 10 }],
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAction {
    /// Label of the button that opens the list.
    pub title: String,
    pub sections: Vec<ListSection>,
}

impl Validate for ListAction {
    fn validate(&self, walker: &mut Walker) {
        walker.text(
            "Title",
            &self.title,
            &[Rule::Required, Rule::Length { min: 1, max: 20 }],
        );
        walker.list(
            "Sections",
            &self.sections,
            &[Rule::Required, Rule::Count { min: 1, max: 10 }],
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveListContent {
    pub body: InteractiveBody,
    pub action: ListAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<ListHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<InteractiveFooter>,
}

impl InteractiveListContent {
    pub fn new(body: impl Into<String>, title: impl Into<String>, sections: Vec<ListSection>) -> Self {
        Self {
            body: InteractiveBody::new(body),
            action: ListAction {
                title: title.into(),
                sections,
            },
            header: None,
            footer: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(ListHeader::Text(TextHeader::new(text)));
        self
    }

    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(InteractiveFooter::new(footer));
        self
    }
}

impl Validate for InteractiveListContent {
    fn validate(&self, walker: &mut Walker) {
        walker.nested("Body", &self.body);
        walker.nested("Action", &self.action);
        walker.optional_nested("Header", self.header.as_ref(), &[]);
        walker.optional_nested("Footer", self.footer.as_ref(), &[]);
    }
}

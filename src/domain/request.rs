use serde::{Deserialize, Serialize};

use crate::domain::template::TemplateContent;
use crate::domain::validation::{Rule, Validate, Walker};

/// Sender/recipient bounds shared by every channel.
pub(crate) const PARTY: &[Rule] = &[Rule::Required, Rule::Length { min: 1, max: 24 }];
pub(crate) const MESSAGE_ID: &[Rule] = &[Rule::Length { min: 0, max: 50 }];
pub(crate) const CALLBACK_DATA: &[Rule] = &[Rule::Length { min: 0, max: 4000 }];
pub(crate) const NOTIFY_URL: &[Rule] = &[Rule::Length { min: 0, max: 2048 }];

/// A single WhatsApp message carrying content of type `C`.
///
/// The content type selects the endpoint: `WhatsAppMessage<TextContent>` is
/// sent to `/whatsapp/1/message/text`, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppMessage<C> {
    /// Registered WhatsApp sender number in international format.
    pub from: String,
    /// Recipient number in international format.
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub content: C,
    /// Custom data echoed back in delivery reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    /// URL receiving delivery and seen reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
}

impl<C> WhatsAppMessage<C> {
    pub fn new(from: impl Into<String>, to: impl Into<String>, content: C) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            message_id: None,
            content,
            callback_data: None,
            notify_url: None,
        }
    }

    #[must_use]
    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    #[must_use]
    pub fn with_callback_data(mut self, callback_data: impl Into<String>) -> Self {
        self.callback_data = Some(callback_data.into());
        self
    }

    #[must_use]
    pub fn with_notify_url(mut self, notify_url: impl Into<String>) -> Self {
        self.notify_url = Some(notify_url.into());
        self
    }
}

impl<C: Validate> Validate for WhatsAppMessage<C> {
    fn validate(&self, walker: &mut Walker) {
        walker.text("From", &self.from, PARTY);
        walker.text("To", &self.to, PARTY);
        walker.optional_text("MessageId", self.message_id.as_deref(), MESSAGE_ID);
        walker.optional_text("CallbackData", self.callback_data.as_deref(), CALLBACK_DATA);
        walker.optional_text("NotifyUrl", self.notify_url.as_deref(), NOTIFY_URL);
        walker.nested("Content", &self.content);
    }
}

/// Template messages are only sent in bulk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppBulkMessage {
    pub messages: Vec<WhatsAppMessage<TemplateContent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_id: Option<String>,
}

impl WhatsAppBulkMessage {
    pub fn new(messages: Vec<WhatsAppMessage<TemplateContent>>) -> Self {
        Self {
            messages,
            bulk_id: None,
        }
    }

    #[must_use]
    pub fn with_bulk_id(mut self, bulk_id: impl Into<String>) -> Self {
        self.bulk_id = Some(bulk_id.into());
        self
    }
}

impl Validate for WhatsAppBulkMessage {
    fn validate(&self, walker: &mut Walker) {
        walker.optional_text("BulkId", self.bulk_id.as_deref(), &[Rule::Length { min: 0, max: 100 }]);
        walker.list("Messages", &self.messages, &[Rule::Required]);
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Delivery status as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStatus {
    #[serde(default)]
    pub group_id: Option<i32>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

impl MessageStatus {
    /// Status group reported by the platform, if known.
    pub fn group(&self) -> Option<StatusGroup> {
        self.group_id.and_then(StatusGroup::from_id)
    }
}

/// Top-level status groups shared by all channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusGroup {
    Pending,
    Undeliverable,
    Delivered,
    Expired,
    Rejected,
}

impl StatusGroup {
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Pending),
            2 => Some(Self::Undeliverable),
            3 => Some(Self::Delivered),
            4 => Some(Self::Expired),
            5 => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns `true` for groups that will not change any more.
    pub fn is_final(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Per-recipient result of a send call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInfo {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub message_count: Option<i32>,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub status: MessageStatus,
}

/// Result of a call that sends one or more messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkMessageInfo {
    #[serde(default)]
    pub messages: Vec<MessageInfo>,
    #[serde(default)]
    pub bulk_id: Option<String>,
}

/// Result of a single or bulk RCS send.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RcsMessageResponse {
    #[serde(default)]
    pub messages: Vec<MessageInfo>,
}

/// Diagnostics attached to a rejected call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceException {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Field name to server-side validation messages.
    #[serde(default)]
    pub validation_errors: BTreeMap<String, Vec<String>>,
}

impl fmt::Display for ServiceException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message_id, &self.text) {
            (Some(id), Some(text)) => write!(f, "{id}: {text}")?,
            (Some(id), None) => f.write_str(id)?,
            (None, Some(text)) => f.write_str(text)?,
            (None, None) => f.write_str("no details")?,
        }
        if !self.validation_errors.is_empty() {
            write!(f, " ({} invalid field(s))", self.validation_errors.len())?;
        }
        Ok(())
    }
}

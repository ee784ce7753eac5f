//! WebRTC push notification configuration.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{Rule, Validate, Walker};

/// Push notification settings for one WebRTC application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushConfiguration {
    pub application_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosPushConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidPushConfig>,
}

impl PushConfiguration {
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            ios: None,
            android: None,
        }
    }

    #[must_use]
    pub fn with_ios(mut self, ios: IosPushConfig) -> Self {
        self.ios = Some(ios);
        self
    }

    #[must_use]
    pub fn with_android(mut self, fcm_server_key: impl Into<String>) -> Self {
        self.android = Some(AndroidPushConfig {
            fcm_server_key: fcm_server_key.into(),
        });
        self
    }
}

impl Validate for PushConfiguration {
    fn validate(&self, walker: &mut Walker) {
        walker.text("ApplicationId", &self.application_id, &[Rule::Required]);
        walker.optional_nested("Ios", self.ios.as_ref(), &[]);
        walker.optional_nested("Android", self.android.as_ref(), &[]);
    }
}

/// APNs certificate used for iOS push notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosPushConfig {
    pub certificate_file_name: String,
    /// Base64 encoded certificate.
    pub certificate_file_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key_password: Option<String>,
}

impl Validate for IosPushConfig {
    fn validate(&self, walker: &mut Walker) {
        walker.text("CertificateFileName", &self.certificate_file_name, &[Rule::Required]);
        walker.text("CertificateFileContent", &self.certificate_file_content, &[Rule::Required]);
    }
}

/// FCM server key used for Android push notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidPushConfig {
    pub fcm_server_key: String,
}

impl Validate for AndroidPushConfig {
    fn validate(&self, walker: &mut Walker) {
        walker.text("FcmServerKey", &self.fcm_server_key, &[Rule::Required]);
    }
}

/// Stored push configuration as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushConfigurationResponse {
    pub id: String,
    pub application_id: String,
    #[serde(default)]
    pub ios: Option<IosPushConfig>,
    #[serde(default)]
    pub android: Option<AndroidPushConfig>,
}

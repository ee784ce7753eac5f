//! WhatsApp message content: text, media, location, and contacts.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{Rule, Validate, Walker};

const MEDIA_URL: &[Rule] = &[Rule::Required, Rule::Length { min: 1, max: 2048 }];
const CAPTION: &[Rule] = &[Rule::Length { min: 0, max: 3000 }];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    /// Message text, up to 4096 characters. URLs are allowed.
    pub text: String,
    /// Render a preview for the first URL in `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<bool>,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            preview_url: None,
        }
    }

    #[must_use]
    pub fn with_preview_url(mut self, preview_url: bool) -> Self {
        self.preview_url = Some(preview_url);
        self
    }
}

impl Validate for TextContent {
    fn validate(&self, walker: &mut Walker) {
        walker.text(
            "Text",
            &self.text,
            &[Rule::Required, Rule::Length { min: 1, max: 4096 }],
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    pub media_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl DocumentContent {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
            caption: None,
            filename: None,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

impl Validate for DocumentContent {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
        walker.optional_text("Caption", self.caption.as_deref(), CAPTION);
        walker.optional_text(
            "Filename",
            self.filename.as_deref(),
            &[Rule::Length { min: 0, max: 240 }],
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    pub media_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageContent {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
            caption: None,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl Validate for ImageContent {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
        walker.optional_text("Caption", self.caption.as_deref(), CAPTION);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioContent {
    pub media_url: String,
}

impl AudioContent {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
        }
    }
}

impl Validate for AudioContent {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    pub media_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl VideoContent {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
            caption: None,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl Validate for VideoContent {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
        walker.optional_text("Caption", self.caption.as_deref(), CAPTION);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerContent {
    pub media_url: String,
}

impl StickerContent {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
        }
    }
}

impl Validate for StickerContent {
    fn validate(&self, walker: &mut Walker) {
        walker.text("MediaUrl", &self.media_url, MEDIA_URL);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationContent {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LocationContent {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
            address: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

pub(crate) const LATITUDE: &[Rule] = &[Rule::Range {
    min: -90.0,
    max: 90.0,
}];
pub(crate) const LONGITUDE: &[Rule] = &[Rule::Range {
    min: -180.0,
    max: 180.0,
}];

impl Validate for LocationContent {
    fn validate(&self, walker: &mut Walker) {
        walker.number("Latitude", Some(self.latitude), LATITUDE);
        walker.number("Longitude", Some(self.longitude), LONGITUDE);
        walker.optional_text(
            "Name",
            self.name.as_deref(),
            &[Rule::Length { min: 0, max: 1000 }],
        );
        walker.optional_text(
            "Address",
            self.address.as_deref(),
            &[Rule::Length { min: 0, max: 1000 }],
        );
    }
}

/// One or more contact cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsContent {
    pub contacts: Vec<Contact>,
}

impl ContactsContent {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl Validate for ContactsContent {
    fn validate(&self, walker: &mut Walker) {
        walker.list("Contacts", &self.contacts, &[Rule::Required]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: ContactName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<ContactOrganization>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<ContactAddress>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<ContactEmail>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<ContactPhone>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<ContactUrl>,
}

impl Contact {
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            birthday: None,
            org: None,
            addresses: Vec::new(),
            emails: Vec::new(),
            phones: Vec::new(),
            urls: Vec::new(),
        }
    }
}

impl Validate for Contact {
    fn validate(&self, walker: &mut Walker) {
        walker.nested("Name", &self.name);
        walker.optional_nested("Org", self.org.as_ref(), &[]);
        walker.list("Addresses", &self.addresses, &[]);
        walker.list("Emails", &self.emails, &[]);
        walker.list("Phones", &self.phones, &[]);
        walker.list("Urls", &self.urls, &[]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactName {
    pub first_name: String,
    pub formatted_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
}

impl ContactName {
    pub fn new(first_name: impl Into<String>, formatted_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            formatted_name: formatted_name.into(),
            last_name: None,
            middle_name: None,
            name_suffix: None,
            name_prefix: None,
        }
    }
}

impl Validate for ContactName {
    fn validate(&self, walker: &mut Walker) {
        walker.text("FirstName", &self.first_name, &[Rule::Required]);
        walker.text("FormattedName", &self.formatted_name, &[Rule::Required]);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContactDetailType {
    Home,
    Work,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContactPhoneType {
    Cell,
    Main,
    Iphone,
    Home,
    Work,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ContactDetailType>,
}

impl Validate for ContactAddress {
    fn validate(&self, _walker: &mut Walker) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEmail {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ContactDetailType>,
}

impl Validate for ContactEmail {
    fn validate(&self, walker: &mut Walker) {
        walker.text("Email", &self.email, &[Rule::Required]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPhone {
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ContactPhoneType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wa_id: Option<String>,
}

impl Validate for ContactPhone {
    fn validate(&self, walker: &mut Walker) {
        walker.text("Phone", &self.phone, &[Rule::Required]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUrl {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ContactDetailType>,
}

impl Validate for ContactUrl {
    fn validate(&self, walker: &mut Walker) {
        walker.text("Url", &self.url, &[Rule::Required]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactOrganization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Validate for ContactOrganization {
    fn validate(&self, _walker: &mut Walker) {}
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_length_boundaries() {
        assert!(TextContent::new("x".repeat(4096)).validation_result().is_valid());
        let result = TextContent::new("x".repeat(4097)).validation_result();
        assert!(result.contains_path("Text"));
        assert!(!TextContent::new("").validation_result().is_valid());
    }

    #[test]
    fn text_serializes_camel_case_and_skips_absent() {
        let value = serde_json::to_value(TextContent::new("hi")).unwrap();
        assert_eq!(value, json!({"text": "hi"}));

        let value = serde_json::to_value(TextContent::new("hi").with_preview_url(true)).unwrap();
        assert_eq!(value, json!({"text": "hi", "previewUrl": true}));
    }

    #[test]
    fn document_checks_url_caption_and_filename() {
        let doc = DocumentContent::new("")
            .with_caption("c".repeat(3001))
            .with_filename("f".repeat(241));
        let result = doc.validation_result();
        let paths = result.paths().collect::<Vec<_>>();
        assert_eq!(paths, vec!["MediaUrl", "MediaUrl", "Caption", "Filename"]);
    }

    #[test]
    fn location_ranges_are_inclusive() {
        assert!(
            LocationContent::new(90.0, -180.0)
                .validation_result()
                .is_valid()
        );
        let result = LocationContent::new(90.5, 181.0).validation_result();
        assert!(result.contains_path("Latitude"));
        assert!(result.contains_path("Longitude"));
    }

    #[test]
    fn contacts_require_at_least_one_entry() {
        let result = ContactsContent::new(Vec::new()).validation_result();
        assert!(result.contains_path("Contacts"));
    }

    #[test]
    fn contact_name_paths_are_nested() {
        let content = ContactsContent::new(vec![Contact::new(ContactName::new("", ""))]);
        let result = content.validation_result();
        assert!(result.contains_path("Contacts[0].Name.FirstName"));
        assert!(result.contains_path("Contacts[0].Name.FormattedName"));
    }

    #[test]
    fn contact_serializes_details() {
        let mut contact = Contact::new(ContactName::new("John", "John Smith"));
        contact.phones.push(ContactPhone {
            phone: "447860099300".to_owned(),
            r#type: Some(ContactPhoneType::Cell),
            wa_id: None,
        });
        let value = serde_json::to_value(ContactsContent::new(vec![contact])).unwrap();
        assert_eq!(
            value,
            json!({
                "contacts": [{
                    "name": {"firstName": "John", "formattedName": "John Smith"},
                    "phones": [{"phone": "447860099300", "type": "CELL"}]
                }]
            })
        );
    }
}

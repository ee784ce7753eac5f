//! Domain layer: request and content types with declarative validation (no I/O).

pub mod discriminator;
mod content;
mod interactive;
mod rcs;
mod request;
mod response;
mod template;
mod validation;
mod value;
mod webrtc;

pub use content::{
    AudioContent, Contact, ContactAddress, ContactDetailType, ContactEmail, ContactName,
    ContactOrganization, ContactPhone, ContactPhoneType, ContactUrl, ContactsContent,
    DocumentContent, ImageContent, LocationContent, StickerContent, TextContent, VideoContent,
};
pub use discriminator::{DecodeError, Discriminated, SchemaMismatch, decode};
pub use interactive::{
    ButtonsAction, ButtonsHeader, DocumentHeader, ImageHeader, InteractiveBody, InteractiveButton,
    InteractiveButtonsContent, InteractiveFooter, InteractiveListContent, ListAction, ListHeader,
    ListRow, ListSection, ReplyButton, TextHeader, VideoHeader,
};
pub use rcs::{
    CardAlignment, CardContent, CardMedia, CardOrientation, CardWidth, DialPhoneSuggestion,
    MediaHeight, OpenUrlSuggestion, RcsBulkMessages, RcsCard, RcsCarousel, RcsContent, RcsFile,
    RcsMessage, RcsResource, RcsText, ReplySuggestion, RequestLocationSuggestion,
    ShowLocationSuggestion, SmsFailover, Suggestion, ValidityPeriodTimeUnit,
};
pub use request::{WhatsAppBulkMessage, WhatsAppMessage};
pub use response::{
    BulkMessageInfo, MessageInfo, MessageStatus, RcsMessageResponse, ServiceException,
    StatusGroup,
};
pub use template::{
    QuickReplyButton, TemplateBody, TemplateButton, TemplateContent, TemplateData,
    TemplateDocumentHeader, TemplateHeader, TemplateImageHeader, TemplateLocationHeader,
    TemplateTextHeader, TemplateVideoHeader, UrlButton,
};
pub use validation::{Rule, Validate, ValidationError, ValidationResult, Violation, Walker};
pub use value::PhoneNumber;
pub use webrtc::{AndroidPushConfig, IosPushConfig, PushConfiguration, PushConfigurationResponse};

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    /// Every variant emits its own tag, and together the variants cover the registry.
    fn assert_tags<T: Discriminated + Serialize + std::fmt::Debug>(variants: &[T]) {
        let mut seen = Vec::new();
        for variant in variants {
            let value = serde_json::to_value(variant).unwrap();
            assert_eq!(value[T::FIELD], variant.tag(), "{variant:?}");
            assert!(T::TAGS.contains(&variant.tag()), "{variant:?}");
            assert_eq!(T::resolve(value).unwrap().tag(), variant.tag());
            seen.push(variant.tag());
        }
        for tag in T::TAGS {
            assert!(seen.contains(tag), "no variant emits {tag}");
        }
    }

    #[test]
    fn interactive_shapes_emit_their_tags() {
        assert_tags(&[
            ButtonsHeader::text("Header"),
            ButtonsHeader::image("https://example.com/a.png"),
            ButtonsHeader::video("https://example.com/a.mp4"),
            ButtonsHeader::document("https://example.com/a.pdf", Some("a.pdf".to_owned())),
        ]);
        assert_tags(&[ListHeader::Text(TextHeader::new("Header"))]);
        assert_tags(&[InteractiveButton::reply("1", "Yes")]);
    }

    #[test]
    fn template_shapes_emit_their_tags() {
        assert_tags(&[
            TemplateHeader::Text(TemplateTextHeader {
                placeholder: "Ann".to_owned(),
            }),
            TemplateHeader::Image(TemplateImageHeader {
                media_url: "https://example.com/a.png".to_owned(),
            }),
            TemplateHeader::Video(TemplateVideoHeader {
                media_url: "https://example.com/a.mp4".to_owned(),
            }),
            TemplateHeader::Document(TemplateDocumentHeader {
                media_url: "https://example.com/a.pdf".to_owned(),
                filename: "a.pdf".to_owned(),
            }),
            TemplateHeader::Location(TemplateLocationHeader {
                latitude: 44.8,
                longitude: 20.4,
            }),
        ]);
        assert_tags(&[TemplateButton::quick_reply("yes"), TemplateButton::url("abc")]);
    }

    #[test]
    fn rcs_shapes_emit_their_tags() {
        let card_content = CardContent {
            title: Some("Title".to_owned()),
            ..CardContent::default()
        };
        assert_tags(&[
            RcsContent::text("hi"),
            RcsContent::file("https://example.com/a.png"),
            RcsContent::Card(RcsCard {
                orientation: CardOrientation::Vertical,
                alignment: CardAlignment::Left,
                content: card_content.clone(),
                suggestions: Vec::new(),
            }),
            RcsContent::Carousel(RcsCarousel {
                card_width: CardWidth::Small,
                contents: vec![card_content.clone(), card_content],
                suggestions: Vec::new(),
            }),
        ]);
        assert_tags(&[
            Suggestion::reply("Yes", "yes"),
            Suggestion::OpenUrl(OpenUrlSuggestion {
                text: "Open".to_owned(),
                postback_data: "open".to_owned(),
                url: "https://example.com".to_owned(),
            }),
            Suggestion::DialPhone(DialPhoneSuggestion {
                text: "Call".to_owned(),
                postback_data: "call".to_owned(),
                phone_number: "447860099300".to_owned(),
            }),
            Suggestion::ShowLocation(ShowLocationSuggestion {
                text: "Map".to_owned(),
                postback_data: "map".to_owned(),
                latitude: 44.8,
                longitude: 20.4,
                label: None,
            }),
            Suggestion::RequestLocation(RequestLocationSuggestion {
                text: "Where".to_owned(),
                postback_data: "where".to_owned(),
            }),
        ]);
    }

    #[test]
    fn phone_number_converts_to_msisdn_for_envelope() {
        let from = PhoneNumber::parse(Some(phonenumber::country::Id::GB), "07860 099299").unwrap();
        let to = PhoneNumber::parse(None, "+44 7860 099300").unwrap();
        let request = WhatsAppMessage::new(&from, &to, TextContent::new("hello"));
        assert_eq!(request.from, "447860099299");
        assert_eq!(request.to, "447860099300");
        assert!(request.validation_result().is_valid());
    }

    #[test]
    fn phone_number_rejects_garbage() {
        assert!(matches!(
            PhoneNumber::parse(None, "not a number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            PhoneNumber::parse(None, "   "),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn every_violation_renders_path_and_message() {
        let request = WhatsAppMessage::new("", "447860099300", TextContent::new(""));
        let result = request.validation_result();
        assert!(!result.is_valid());
        let rendered = result.to_string();
        assert!(rendered.contains("From"));
        assert!(rendered.contains("Content.Text"));
    }
}

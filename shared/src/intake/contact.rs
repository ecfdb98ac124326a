//! Contact intake
//!
//! Same pattern as the reservation form, but the section stays on the page
//! after a submit. The WhatsApp CTA carries a fixed greeting.

use super::deep_link::whatsapp_link;
use super::{AcknowledgmentNotice, IntakeForm};
use crate::content::venue::WHATSAPP_CONTACT_ID;
use crate::error::ErrorCode;
use crate::models::{ContactField, ContactMessage};

pub const MESSAGE_SENT_TITLE: &str = "Message Sent!";
pub const MESSAGE_SENT_DESCRIPTION: &str = "We'll get back to you within 24 hours.";

/// Pre-filled text of the "Chat on WhatsApp" call to action
pub const CONTACT_CTA_TEXT: &str = "Hi! I'd like to make a reservation at Taboo Lounge.";

impl IntakeForm for ContactMessage {
    type Field = ContactField;

    const INCOMPLETE: ErrorCode = ErrorCode::ContactIncomplete;
    const CLOSES_ON_SUBMIT: bool = false;

    fn apply(self, field: ContactField, value: String) -> Self {
        self.with_field(field, value)
    }

    fn missing_fields(&self) -> Vec<ContactField> {
        self.missing_required_fields()
    }

    fn field_name(field: ContactField) -> &'static str {
        field.as_str()
    }

    fn acknowledgment() -> AcknowledgmentNotice {
        AcknowledgmentNotice::new(MESSAGE_SENT_TITLE, MESSAGE_SENT_DESCRIPTION)
    }
}

pub fn update_field(
    current: &ContactMessage,
    field: ContactField,
    value: impl Into<String>,
) -> ContactMessage {
    current.clone().with_field(field, value)
}

pub fn submit_locally(current: &ContactMessage) -> (AcknowledgmentNotice, ContactMessage) {
    current.submit_locally()
}

/// WhatsApp link behind the contact section's CTA button
pub fn contact_cta_link() -> String {
    whatsapp_link(WHATSAPP_CONTACT_ID, CONTACT_CTA_TEXT)
}

//! Reservation intake
//!
//! Pure functions over [`ReservationRequest`]: field update, simulated
//! local submission and the WhatsApp deep link. The calling surface is
//! responsible for the required-field check before [`submit_locally`].

use super::deep_link::whatsapp_link;
use super::{AcknowledgmentNotice, IntakeForm};
use crate::content::venue::WHATSAPP_CONTACT_ID;
use crate::error::ErrorCode;
use crate::models::{ReservationField, ReservationRequest};

pub const RESERVATION_SENT_TITLE: &str = "Reservation Request Sent!";
pub const RESERVATION_SENT_DESCRIPTION: &str = "We'll confirm your booking within 2 hours.";

/// Placeholder for a blank name/date/time in the summary
pub const NOT_SPECIFIED: &str = "Not specified";
/// Placeholder for blank notes in the summary
pub const NO_NOTES: &str = "None";

const SUMMARY_HEADER: &str = "Hi! I'd like to make a reservation:";

impl IntakeForm for ReservationRequest {
    type Field = ReservationField;

    const INCOMPLETE: ErrorCode = ErrorCode::ReservationIncomplete;
    const CLOSES_ON_SUBMIT: bool = true;

    fn apply(self, field: ReservationField, value: String) -> Self {
        self.with_field(field, value)
    }

    fn missing_fields(&self) -> Vec<ReservationField> {
        self.missing_required_fields()
    }

    fn field_name(field: ReservationField) -> &'static str {
        field.as_str()
    }

    fn acknowledgment() -> AcknowledgmentNotice {
        AcknowledgmentNotice::new(RESERVATION_SENT_TITLE, RESERVATION_SENT_DESCRIPTION)
    }
}

/// Copy of `current` with `field` replaced by `value`; any text accepted
pub fn update_field(
    current: &ReservationRequest,
    field: ReservationField,
    value: impl Into<String>,
) -> ReservationRequest {
    current.clone().with_field(field, value)
}

/// Acknowledge unconditionally and hand back the empty-default request
pub fn submit_locally(current: &ReservationRequest) -> (AcknowledgmentNotice, ReservationRequest) {
    current.submit_locally()
}

/// Human-readable booking summary carried in the deep link
///
/// Lines in fixed order Name, Date, Time, Guests, Notes. `guests` is used
/// raw. `email`, `phone` and `occasion` are not part of the summary.
pub fn reservation_summary(current: &ReservationRequest) -> String {
    [
        SUMMARY_HEADER.to_string(),
        format!("- Name: {}", or_placeholder(&current.name, NOT_SPECIFIED)),
        format!("- Date: {}", or_placeholder(&current.date, NOT_SPECIFIED)),
        format!("- Time: {}", or_placeholder(&current.time, NOT_SPECIFIED)),
        format!("- Guests: {}", current.guests),
        format!("- Notes: {}", or_placeholder(&current.notes, NO_NOTES)),
    ]
    .join("\n")
}

/// `https://wa.me/<venue>?text=<summary>`; leaves `current` untouched
pub fn build_external_message_link(current: &ReservationRequest) -> String {
    if !current.email.is_empty() || !current.occasion.is_empty() {
        tracing::debug!(
            has_email = !current.email.is_empty(),
            occasion = %current.occasion,
            "email/occasion collected but not carried in the WhatsApp summary"
        );
    }
    whatsapp_link(WHATSAPP_CONTACT_ID, &reservation_summary(current))
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::deep_link::message_text;

    fn kasun() -> ReservationRequest {
        ReservationRequest {
            name: "Kasun".into(),
            date: "2024-12-24".into(),
            time: "19:00".into(),
            guests: "4".into(),
            notes: "Window seat".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_update_field_is_non_interfering() {
        let start = kasun().with_field(ReservationField::Email, "kasun@example.com");
        for field in ReservationField::ALL {
            let next = update_field(&start, field, "changed");
            assert_eq!(next.get(field), "changed");
            for other in ReservationField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(next.get(other), start.get(other), "{other} changed by {field}");
            }
        }
    }

    #[test]
    fn test_update_field_sequence_keeps_untouched_fields() {
        let mut req = ReservationRequest::default();
        req = update_field(&req, ReservationField::Name, "K");
        req = update_field(&req, ReservationField::Name, "Ka");
        req = update_field(&req, ReservationField::Notes, "Birthday cake");
        req = update_field(&req, ReservationField::Name, "Kasun");
        assert_eq!(req.name, "Kasun");
        assert_eq!(req.notes, "Birthday cake");
        assert_eq!(req.guests, "2");
        assert!(req.phone.is_empty() && req.date.is_empty() && req.time.is_empty());
    }

    #[test]
    fn test_update_field_does_not_touch_original() {
        let original = kasun();
        let _ = update_field(&original, ReservationField::Name, "Someone else");
        assert_eq!(original.name, "Kasun");
    }

    #[test]
    fn test_submit_locally_always_resets() {
        for req in [ReservationRequest::default(), kasun()] {
            let (notice, reset) = submit_locally(&req);
            assert_eq!(reset, ReservationRequest::default());
            assert_eq!(notice.title, "Reservation Request Sent!");
            assert_eq!(notice.description, "We'll confirm your booking within 2 hours.");
        }
    }

    #[test]
    fn test_link_is_deterministic() {
        let req = kasun();
        assert_eq!(
            build_external_message_link(&req),
            build_external_message_link(&req)
        );
    }

    #[test]
    fn test_link_does_not_alter_request() {
        let req = kasun();
        let before = req.clone();
        let _ = build_external_message_link(&req);
        assert_eq!(req, before);
    }

    #[test]
    fn test_link_for_empty_request() {
        let req = ReservationRequest {
            guests: "2".into(),
            ..Default::default()
        };
        let link = build_external_message_link(&req);
        assert!(link.starts_with("https://wa.me/94777301747?text="));

        let text = message_text(&link).unwrap();
        assert!(text.contains("Name: Not specified"));
        assert!(text.contains("Date: Not specified"));
        assert!(text.contains("Time: Not specified"));
        assert!(text.contains("Guests: 2"));
        assert!(text.contains("Notes: None"));
    }

    #[test]
    fn test_link_for_complete_request() {
        let link = build_external_message_link(&kasun());
        let (_, encoded) = link.split_once("?text=").unwrap();

        for value in ["Kasun", "2024-12-24", "19:00", "4", "Window seat"] {
            let encoded_value = urlencoding::encode(value);
            assert!(encoded.contains(encoded_value.as_ref()), "{value} missing");
        }
        assert!(!message_text(&link).unwrap().contains(NOT_SPECIFIED));
    }

    #[test]
    fn test_summary_line_order() {
        let summary = reservation_summary(&kasun());
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Hi! I'd like to make a reservation:",
                "- Name: Kasun",
                "- Date: 2024-12-24",
                "- Time: 19:00",
                "- Guests: 4",
                "- Notes: Window seat",
            ]
        );
    }

    #[test]
    fn test_guests_used_raw() {
        let req = kasun().with_field(ReservationField::Guests, "9+");
        assert!(reservation_summary(&req).contains("- Guests: 9+"));
        let req = kasun().with_field(ReservationField::Guests, "");
        assert!(reservation_summary(&req).contains("- Guests: \n"));
    }

    #[test]
    fn test_validate_required_fields() {
        assert!(kasun().with_field(ReservationField::Phone, "+94 77 123 4567").validate().is_ok());

        let err = kasun().validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ReservationIncomplete);
        assert_eq!(err.missing_fields(), vec!["phone"]);
    }
}

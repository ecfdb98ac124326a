//! Input validation helpers
//!
//! Upper bounds on free-text form input accepted over HTTP. Blank
//! required fields are the intake layer's concern; these limits only
//! guard against oversized posts.

use shared::models::{ContactField, ContactMessage, ReservationField, ReservationRequest};

use crate::utils::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Guest names
pub const MAX_NAME_LEN: usize = 200;

/// Short values: phone, date, time, party size, occasion
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Special requests and contact messages
pub const MAX_NOTE_LEN: usize = 2000;

/// Reject a value longer than `max_len` characters
pub fn validate_max_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

fn reservation_limit(field: ReservationField) -> usize {
    match field {
        ReservationField::Name => MAX_NAME_LEN,
        ReservationField::Email => MAX_EMAIL_LEN,
        ReservationField::Notes => MAX_NOTE_LEN,
        ReservationField::Phone
        | ReservationField::Date
        | ReservationField::Time
        | ReservationField::Guests
        | ReservationField::Occasion => MAX_SHORT_TEXT_LEN,
    }
}

fn contact_limit(field: ContactField) -> usize {
    match field {
        ContactField::Name => MAX_NAME_LEN,
        ContactField::Email => MAX_EMAIL_LEN,
        ContactField::Phone => MAX_SHORT_TEXT_LEN,
        ContactField::Message => MAX_NOTE_LEN,
    }
}

pub fn validate_reservation_input(request: &ReservationRequest) -> AppResult<()> {
    for field in ReservationField::ALL {
        validate_max_len(request.get(field), field.as_str(), reservation_limit(field))?;
    }
    Ok(())
}

pub fn validate_contact_input(message: &ContactMessage) -> AppResult<()> {
    for field in ContactField::ALL {
        validate_max_len(message.get(field), field.as_str(), contact_limit(field))?;
    }
    Ok(())
}

/// Single-field check used by the draft update endpoint
pub fn validate_reservation_field(field: ReservationField, value: &str) -> AppResult<()> {
    validate_max_len(value, field.as_str(), reservation_limit(field))
}

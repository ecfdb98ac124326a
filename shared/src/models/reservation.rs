//! Reservation Request Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::options::{Occasion, PartySize, TimeSlot};
use crate::error::{AppError, ErrorCode};

/// Default party size pre-selected on the form
pub const DEFAULT_GUESTS: &str = "2";

/// Reservation form state (预订请求)
///
/// Every field is kept as raw text: the form accepts any input and the
/// typed views ([`TimeSlot`], [`PartySize`], [`Occasion`]) are derived on
/// demand. The empty state has every field blank except `guests = "2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// `YYYY-MM-DD` from the date input
    pub date: String,
    pub time: String,
    /// `"1"`..`"8"` or `"9+"`
    pub guests: String,
    /// Occasion value, empty = unset
    pub occasion: String,
    pub notes: String,
}

impl Default for ReservationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            date: String::new(),
            time: String::new(),
            guests: DEFAULT_GUESTS.to_string(),
            occasion: String::new(),
            notes: String::new(),
        }
    }
}

/// Reservation form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationField {
    Name,
    Phone,
    Email,
    Date,
    Time,
    Guests,
    Occasion,
    Notes,
}

impl ReservationField {
    pub const ALL: [ReservationField; 8] = [
        ReservationField::Name,
        ReservationField::Phone,
        ReservationField::Email,
        ReservationField::Date,
        ReservationField::Time,
        ReservationField::Guests,
        ReservationField::Occasion,
        ReservationField::Notes,
    ];

    /// Fields that must be non-empty at submission
    pub const REQUIRED: [ReservationField; 4] = [
        ReservationField::Name,
        ReservationField::Phone,
        ReservationField::Date,
        ReservationField::Time,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ReservationField::Name => "name",
            ReservationField::Phone => "phone",
            ReservationField::Email => "email",
            ReservationField::Date => "date",
            ReservationField::Time => "time",
            ReservationField::Guests => "guests",
            ReservationField::Occasion => "occasion",
            ReservationField::Notes => "notes",
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for ReservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::UnknownReservationField,
                    format!("Unknown reservation field: {s}"),
                )
                .with_detail("field", s)
            })
    }
}

impl ReservationRequest {
    /// Current raw value of a field
    pub fn get(&self, field: ReservationField) -> &str {
        match field {
            ReservationField::Name => &self.name,
            ReservationField::Phone => &self.phone,
            ReservationField::Email => &self.email,
            ReservationField::Date => &self.date,
            ReservationField::Time => &self.time,
            ReservationField::Guests => &self.guests,
            ReservationField::Occasion => &self.occasion,
            ReservationField::Notes => &self.notes,
        }
    }

    /// Builder-style replacement of one field; no validation
    pub fn with_field(mut self, field: ReservationField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ReservationField::Name => self.name = value,
            ReservationField::Phone => self.phone = value,
            ReservationField::Email => self.email = value,
            ReservationField::Date => self.date = value,
            ReservationField::Time => self.time = value,
            ReservationField::Guests => self.guests = value,
            ReservationField::Occasion => self.occasion = value,
            ReservationField::Notes => self.notes = value,
        }
        self
    }

    /// Required fields that are empty, in form order
    ///
    /// Any character counts as a value, whitespace included.
    pub fn missing_required_fields(&self) -> Vec<ReservationField> {
        ReservationField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn time_slot(&self) -> Option<TimeSlot> {
        TimeSlot::from_value(&self.time)
    }

    pub fn party_size(&self) -> Option<PartySize> {
        PartySize::from_value(&self.guests)
    }

    pub fn occasion(&self) -> Option<Occasion> {
        Occasion::from_value(&self.occasion)
    }
}

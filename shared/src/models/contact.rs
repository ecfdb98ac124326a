//! Contact Message Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// "Send us a Message" form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    /// Optional
    pub phone: String,
    pub message: String,
}

/// Contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    pub const REQUIRED: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::UnknownContactField,
                    format!("Unknown contact field: {s}"),
                )
                .with_detail("field", s)
            })
    }
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn with_field(mut self, field: ContactField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
        self
    }

    pub fn missing_required_fields(&self) -> Vec<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

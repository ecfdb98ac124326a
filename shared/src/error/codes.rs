//! Unified error codes for the lounge site
//!
//! This module defines all error codes used by the server and the page.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Reservation errors
//! - 2xxx: Contact errors
//! - 3xxx: Content errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, JavaScript on the page, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Reservation ====================
    /// Reservation request is missing required fields
    ReservationIncomplete = 1001,
    /// Unknown reservation form field
    UnknownReservationField = 1002,

    // ==================== 2xxx: Contact ====================
    /// Contact message is missing required fields
    ContactIncomplete = 2001,
    /// Unknown contact form field
    UnknownContactField = 2002,

    // ==================== 3xxx: Content ====================
    /// Menu category not found
    MenuCategoryNotFound = 3001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Page template failed to render
    TemplateError = 9101,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Please fill out this field",

            // Reservation
            ErrorCode::ReservationIncomplete => "Reservation request is missing required fields",
            ErrorCode::UnknownReservationField => "Unknown reservation field",

            // Contact
            ErrorCode::ContactIncomplete => "Contact message is missing required fields",
            ErrorCode::UnknownContactField => "Unknown contact field",

            // Content
            ErrorCode::MenuCategoryNotFound => "Menu category not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::TemplateError => "Page rendering failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Reservation
            1001 => Ok(ErrorCode::ReservationIncomplete),
            1002 => Ok(ErrorCode::UnknownReservationField),

            // Contact
            2001 => Ok(ErrorCode::ContactIncomplete),
            2002 => Ok(ErrorCode::UnknownContactField),

            // Content
            3001 => Ok(ErrorCode::MenuCategoryNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::TemplateError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

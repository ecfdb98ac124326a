//! Intake - 表单收集与提交
//!
//! Two forms share one pattern: collect fields, refuse submission while a
//! required field is blank, acknowledge, reset.
//!
//! - [`reservation`] - booking modal: local acknowledgment or WhatsApp deep link
//! - [`contact`] - "Send us a Message" form and the WhatsApp CTA
//! - [`surface`] - Closed/Open state machine around a draft
//! - [`deep_link`] - `wa.me` link construction
//!
//! Nothing here performs I/O. "Submitting" returns a notice for the caller
//! to show; nothing is stored or sent anywhere.

pub mod contact;
pub mod deep_link;
pub mod reservation;
pub mod surface;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

pub use surface::{IntakeSurface, SurfaceState};

/// Transient confirmation shown after a simulated submission (toast)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgmentNotice {
    pub title: String,
    pub description: String,
}

impl AcknowledgmentNotice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A form that can sit behind an [`IntakeSurface`]
pub trait IntakeForm: Clone + Default + PartialEq {
    type Field: Copy + Eq + fmt::Display + 'static;

    /// Error code used when required fields are blank
    const INCOMPLETE: ErrorCode;

    /// Whether a successful submit closes the surface (modal) or leaves
    /// it open with a fresh draft (page section)
    const CLOSES_ON_SUBMIT: bool;

    /// Replace one field, leaving the others untouched
    fn apply(self, field: Self::Field, value: String) -> Self;

    /// Required fields currently blank
    fn missing_fields(&self) -> Vec<Self::Field>;

    fn field_name(field: Self::Field) -> &'static str;

    fn acknowledgment() -> AcknowledgmentNotice;

    /// Required-field check performed before any submission
    fn validate(&self) -> AppResult<()> {
        let missing: Vec<&'static str> = self
            .missing_fields()
            .into_iter()
            .map(Self::field_name)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::missing_required(Self::INCOMPLETE, &missing))
        }
    }

    /// Simulated submission: always succeeds, returns the notice and the
    /// reset state
    fn submit_locally(&self) -> (AcknowledgmentNotice, Self) {
        (Self::acknowledgment(), Self::default())
    }
}

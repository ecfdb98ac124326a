//! Intake surface state machine
//!
//! ```text
//! Closed --open--> Open(default draft)
//! Open   --open--> Open                    (draft kept)
//! Open   --edit--> Open(draft with one field replaced)
//! Open   --close-> Closed                  (draft discarded)
//! Open   --submit, missing field--> Open   (no notice)
//! Open   --submit, complete--> Closed      (modal forms)
//!                           or Open(default) (in-page forms)
//! ```
//!
//! A page-section form starts [`IntakeSurface::resume`]d with an empty
//! draft; the booking modal starts [`IntakeSurface::closed`].

use super::{AcknowledgmentNotice, IntakeForm};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceState<F> {
    Closed,
    Open(F),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntakeSurface<F: IntakeForm> {
    state: SurfaceState<F>,
}

impl<F: IntakeForm> Default for IntakeSurface<F> {
    fn default() -> Self {
        Self::closed()
    }
}

impl<F: IntakeForm> IntakeSurface<F> {
    pub fn closed() -> Self {
        Self {
            state: SurfaceState::Closed,
        }
    }

    /// Open surface holding `draft` (e.g. a re-rendered form post)
    pub fn resume(draft: F) -> Self {
        Self {
            state: SurfaceState::Open(draft),
        }
    }

    /// Open with a fresh default draft; an already-open surface keeps its draft
    pub fn open(&mut self) {
        if let SurfaceState::Closed = self.state {
            self.state = SurfaceState::Open(F::default());
        }
    }

    pub fn close(&mut self) {
        self.state = SurfaceState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SurfaceState::Open(_))
    }

    pub fn draft(&self) -> Option<&F> {
        match &self.state {
            SurfaceState::Open(draft) => Some(draft),
            SurfaceState::Closed => None,
        }
    }

    pub fn state(&self) -> &SurfaceState<F> {
        &self.state
    }

    pub fn into_state(self) -> SurfaceState<F> {
        self.state
    }

    pub fn edit(&mut self, field: F::Field, value: impl Into<String>) -> AppResult<()> {
        match &mut self.state {
            SurfaceState::Open(draft) => {
                *draft = std::mem::take(draft).apply(field, value.into());
                Ok(())
            }
            SurfaceState::Closed => Err(AppError::invalid_request(format!(
                "Cannot edit '{field}' while the form is closed"
            ))),
        }
    }

    /// Validate and submit the current draft
    ///
    /// A refused submit leaves the draft exactly as it was and produces no
    /// notice.
    pub fn submit(&mut self) -> AppResult<AcknowledgmentNotice> {
        let draft = match &self.state {
            SurfaceState::Open(draft) => draft,
            SurfaceState::Closed => {
                return Err(AppError::invalid_request(
                    "Cannot submit while the form is closed",
                ));
            }
        };

        draft.validate()?;
        let (notice, reset) = draft.submit_locally();
        self.state = if F::CLOSES_ON_SUBMIT {
            SurfaceState::Closed
        } else {
            SurfaceState::Open(reset)
        };
        Ok(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::{ContactField, ContactMessage, ReservationField, ReservationRequest};

    fn fill_reservation(surface: &mut IntakeSurface<ReservationRequest>) {
        surface.edit(ReservationField::Name, "Kasun").unwrap();
        surface.edit(ReservationField::Phone, "+94 77 123 4567").unwrap();
        surface.edit(ReservationField::Date, "2024-12-24").unwrap();
        surface.edit(ReservationField::Time, "19:00").unwrap();
    }

    #[test]
    fn test_starts_closed() {
        let surface = IntakeSurface::<ReservationRequest>::default();
        assert!(!surface.is_open());
        assert!(surface.draft().is_none());
    }

    #[test]
    fn test_reopen_discards_draft() {
        let mut surface = IntakeSurface::<ReservationRequest>::closed();
        surface.open();
        surface.edit(ReservationField::Name, "Kasun").unwrap();
        surface.close();
        assert_eq!(surface.state(), &SurfaceState::Closed);

        surface.open();
        assert_eq!(surface.draft(), Some(&ReservationRequest::default()));
        assert_eq!(surface.draft().map(|d| d.guests.as_str()), Some("2"));
    }

    #[test]
    fn test_edit_while_closed_is_rejected() {
        let mut surface = IntakeSurface::<ReservationRequest>::closed();
        let err = surface.edit(ReservationField::Name, "Kasun").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert!(!surface.is_open());
    }

    #[test]
    fn test_incomplete_submit_keeps_draft_and_emits_nothing() {
        let mut surface = IntakeSurface::<ReservationRequest>::closed();
        surface.open();
        surface.edit(ReservationField::Name, "Kasun").unwrap();
        let before = surface.clone();

        let err = surface.submit().unwrap_err();
        assert_eq!(err.code, ErrorCode::ReservationIncomplete);
        assert_eq!(err.missing_fields(), vec!["phone", "date", "time"]);
        assert_eq!(surface, before);
    }

    #[test]
    fn test_open_twice_keeps_draft() {
        let mut surface = IntakeSurface::<ReservationRequest>::closed();
        surface.open();
        surface.edit(ReservationField::Name, "Kasun").unwrap();

        surface.open();
        assert_eq!(surface.draft().map(|d| d.name.as_str()), Some("Kasun"));
    }

    #[test]
    fn test_resumed_draft_discarded_on_reopen() {
        let draft = ReservationRequest::default().with_field(ReservationField::Name, "Kasun");
        let mut surface = IntakeSurface::resume(draft);
        surface.edit(ReservationField::Notes, "Window seat").unwrap();
        surface.open();
        assert_eq!(surface.draft().map(|d| d.notes.as_str()), Some("Window seat"));

        surface.close();
        surface.open();
        assert_eq!(surface.draft(), Some(&ReservationRequest::default()));
    }

    #[test]
    fn test_whitespace_only_is_accepted() {
        let mut surface = IntakeSurface::<ReservationRequest>::closed();
        surface.open();
        fill_reservation(&mut surface);
        surface.edit(ReservationField::Name, " ").unwrap();
        assert!(surface.submit().is_ok());
        assert!(!surface.is_open());
    }

    #[test]
    fn test_reservation_submit_closes() {
        let mut surface = IntakeSurface::<ReservationRequest>::closed();
        surface.open();
        fill_reservation(&mut surface);

        let notice = surface.submit().unwrap();
        assert_eq!(notice.title, "Reservation Request Sent!");
        assert_eq!(surface.state(), &SurfaceState::Closed);

        surface.open();
        assert_eq!(surface.draft(), Some(&ReservationRequest::default()));
    }

    #[test]
    fn test_contact_submit_stays_open_and_resets() {
        let mut surface = IntakeSurface::resume(ContactMessage::default());
        surface.edit(ContactField::Name, "Nimali").unwrap();
        surface.edit(ContactField::Email, "nimali@example.com").unwrap();
        surface.edit(ContactField::Message, "Hello").unwrap();

        let notice = surface.submit().unwrap();
        assert_eq!(notice.title, "Message Sent!");
        assert_eq!(surface.draft(), Some(&ContactMessage::default()));
    }

    #[test]
    fn test_submit_while_closed() {
        let mut surface = IntakeSurface::<ContactMessage>::closed();
        assert_eq!(surface.submit().unwrap_err().code, ErrorCode::InvalidRequest);
    }
}

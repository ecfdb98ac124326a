//! Form models
//!
//! Raw form state for the two intake surfaces plus the fixed option
//! tables their selects are built from.

pub mod contact;
pub mod options;
pub mod reservation;

pub use contact::{ContactField, ContactMessage};
pub use options::{Occasion, PartySize, SelectOption, TimeSlot};
pub use reservation::{DEFAULT_GUESTS, ReservationField, ReservationRequest};

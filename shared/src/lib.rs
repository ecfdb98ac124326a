//! Shared types for the Meridian Escapes site
//!
//! Pure, I/O-free building blocks used by the server crate: the unified
//! error system, the reservation and contact form models, intake logic
//! (field update, local submission, WhatsApp deep links, the Closed/Open
//! surface) and the static site content tables.

pub mod content;
pub mod error;
pub mod intake;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use intake::{AcknowledgmentNotice, IntakeForm, IntakeSurface, SurfaceState};
pub use models::{ContactField, ContactMessage, ReservationField, ReservationRequest};

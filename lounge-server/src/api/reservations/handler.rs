//! Reservation API Handlers

use axum::extract::{Form, State};
use axum::response::{Redirect, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};

use shared::content::MenuCategory;
use shared::intake::reservation;
use shared::{IntakeForm, IntakeSurface, ReservationField, ReservationRequest};

use crate::api::{LinkResponse, SubmissionAck};
use crate::api::pages::html_response;
use crate::core::ServerState;
use crate::render::PageView;
use crate::utils::validation::{validate_reservation_field, validate_reservation_input};
use crate::utils::{ApiResponse, AppResult, ErrorCode, ok, ok_with_message};

/// Body of `POST /api/reservations/draft`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftUpdate {
    #[serde(default)]
    pub draft: ReservationRequest,
    pub field: String,
    #[serde(default)]
    pub value: String,
}

/// Booking modal form post
///
/// Accepted: page with the notice, modal closed. Refused: 422 with the
/// modal still open, the draft as entered and the blank fields flagged.
pub async fn submit_form(
    State(state): State<ServerState>,
    Form(draft): Form<ReservationRequest>,
) -> AppResult<Response> {
    validate_reservation_input(&draft)?;

    let mut surface = IntakeSurface::resume(draft);
    let view = PageView::new(state.config(), MenuCategory::DEFAULT);

    match surface.submit() {
        Ok(notice) => {
            tracing::info!("Reservation request accepted");
            let view = view.with_booking(&surface).with_notice(notice);
            html_response(&state, &view, StatusCode::OK)
        }
        Err(e) if e.code == ErrorCode::ReservationIncomplete => {
            let missing = e.missing_fields();
            tracing::warn!(missing = ?missing, "Reservation request refused");
            let view = view.with_booking(&surface).with_booking_errors(missing);
            html_response(&state, &view, StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(e) => Err(e),
    }
}

/// "WhatsApp" button of the booking modal; no required-field check
pub async fn whatsapp_redirect(Form(draft): Form<ReservationRequest>) -> AppResult<Redirect> {
    validate_reservation_input(&draft)?;
    let url = reservation::build_external_message_link(&draft);
    tracing::info!("Reservation WhatsApp link built");
    Ok(Redirect::to(&url))
}

pub async fn submit(
    Json(draft): Json<ReservationRequest>,
) -> AppResult<Json<ApiResponse<SubmissionAck<ReservationRequest>>>> {
    validate_reservation_input(&draft)?;
    if let Err(e) = draft.validate() {
        tracing::warn!(missing = ?e.missing_fields(), "Reservation request refused");
        return Err(e);
    }

    let (notice, reset) = reservation::submit_locally(&draft);
    tracing::info!("Reservation request accepted");
    Ok(ok_with_message(notice.title.clone(), SubmissionAck { notice, reset }))
}

pub async fn link(Json(draft): Json<ReservationRequest>) -> AppResult<Json<ApiResponse<LinkResponse>>> {
    validate_reservation_input(&draft)?;
    Ok(ok(LinkResponse {
        url: reservation::build_external_message_link(&draft),
    }))
}

pub async fn update_draft(
    Json(update): Json<DraftUpdate>,
) -> AppResult<Json<ApiResponse<ReservationRequest>>> {
    let field: ReservationField = update.field.parse()?;
    validate_reservation_field(field, &update.value)?;
    Ok(ok(reservation::update_field(&update.draft, field, update.value)))
}

//! Contact API Handlers

use axum::Json;
use axum::extract::{Form, State};
use axum::response::{Redirect, Response};
use http::StatusCode;

use shared::content::MenuCategory;
use shared::intake::contact;
use shared::{ContactMessage, IntakeForm, IntakeSurface};

use crate::api::{LinkResponse, SubmissionAck};
use crate::api::pages::html_response;
use crate::core::ServerState;
use crate::render::PageView;
use crate::utils::validation::validate_contact_input;
use crate::utils::{ApiResponse, AppResult, ErrorCode, ok, ok_with_message};

/// "Send us a Message" form post
///
/// The section stays on the page either way: cleared after an accepted
/// message, kept as entered (422) when a required field is blank.
pub async fn submit_form(
    State(state): State<ServerState>,
    Form(draft): Form<ContactMessage>,
) -> AppResult<Response> {
    validate_contact_input(&draft)?;

    let mut surface = IntakeSurface::resume(draft);
    let view = PageView::new(state.config(), MenuCategory::DEFAULT);

    match surface.submit() {
        Ok(notice) => {
            tracing::info!("Contact message accepted");
            let view = view.with_contact(&surface, Vec::new()).with_notice(notice);
            html_response(&state, &view, StatusCode::OK)
        }
        Err(e) if e.code == ErrorCode::ContactIncomplete => {
            let missing = e.missing_fields();
            tracing::warn!(missing = ?missing, "Contact message refused");
            let view = view.with_contact(&surface, missing);
            html_response(&state, &view, StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(e) => Err(e),
    }
}

pub async fn whatsapp_redirect() -> Redirect {
    Redirect::to(&contact::contact_cta_link())
}

pub async fn submit(
    Json(draft): Json<ContactMessage>,
) -> AppResult<Json<ApiResponse<SubmissionAck<ContactMessage>>>> {
    validate_contact_input(&draft)?;
    if let Err(e) = draft.validate() {
        tracing::warn!(missing = ?e.missing_fields(), "Contact message refused");
        return Err(e);
    }

    let (notice, reset) = contact::submit_locally(&draft);
    tracing::info!("Contact message accepted");
    Ok(ok_with_message(notice.title.clone(), SubmissionAck { notice, reset }))
}

pub async fn link() -> Json<ApiResponse<LinkResponse>> {
    ok(LinkResponse {
        url: contact::contact_cta_link(),
    })
}

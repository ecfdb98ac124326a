use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use serde::Deserialize;

use shared::content::MenuCategory;
use shared::{IntakeSurface, ReservationRequest};

use crate::core::ServerState;
use crate::render::PageView;
use crate::utils::AppResult;

/// Query string of `GET /`
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `open` shows the booking modal with a fresh draft
    pub booking: Option<String>,
    /// Selected menu tab id
    pub menu: Option<String>,
}

impl PageQuery {
    fn booking_open(&self) -> bool {
        self.booking.as_deref() == Some("open")
    }
}

pub async fn index(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Response> {
    let mut booking = IntakeSurface::<ReservationRequest>::closed();
    if query.booking_open() {
        booking.open();
    }

    let view = PageView::new(state.config(), MenuCategory::select(query.menu.as_deref()))
        .with_booking(&booking);
    html_response(&state, &view, StatusCode::OK)
}

/// Render the landing page with the given status
pub fn html_response(state: &ServerState, view: &PageView, status: StatusCode) -> AppResult<Response> {
    let html = state.renderer.render_page(view)?;
    Ok((status, Html(html)).into_response())
}

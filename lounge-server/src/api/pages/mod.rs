//! Landing page

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::html_response;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(handler::index))
}

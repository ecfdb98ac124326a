//! Reservation API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /reservations | POST | 表单提交, 返回整页 |
//! | /reservations/whatsapp | POST | 303 跳转到 WhatsApp |
//! | /api/reservations | POST | JSON 提交 |
//! | /api/reservations/link | POST | JSON, 生成 WhatsApp 链接 |
//! | /api/reservations/draft | POST | JSON, 修改草稿中的一个字段 |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub use handler::DraftUpdate;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/reservations", post(handler::submit_form))
        .route("/reservations/whatsapp", post(handler::whatsapp_redirect))
        .nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::submit))
        .route("/link", post(handler::link))
        .route("/draft", post(handler::update_draft))
}

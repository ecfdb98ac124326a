//! Contact API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /contact | POST | 留言表单提交, 返回整页 |
//! | /contact/whatsapp | GET | 303 跳转到 WhatsApp |
//! | /api/contact | POST | JSON 提交 |
//! | /api/contact/link | GET | CTA 链接 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/contact", post(handler::submit_form))
        .route("/contact/whatsapp", get(handler::whatsapp_redirect))
        .nest("/api/contact", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::submit))
        .route("/link", get(handler::link))
}

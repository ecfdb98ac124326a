//! HTTP 路由和处理器
//!
//! | 模块 | 前缀 | 说明 |
//! |------|------|------|
//! | [`pages`] | `/` | 服务端渲染的首页 |
//! | [`reservations`] | `/reservations`, `/api/reservations` | 订座表单 / WhatsApp |
//! | [`contact`] | `/contact`, `/api/contact` | 留言表单 / WhatsApp CTA |
//! | [`menu`] | `/api/menu` | 菜单数据 |
//! | [`health`] | `/health` | 健康检查 |

pub mod contact;
pub mod health;
pub mod menu;
pub mod pages;
pub mod reservations;

use serde::{Deserialize, Serialize};

use shared::AcknowledgmentNotice;

/// Result of an accepted submission: the notice to show and the reset form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionAck<F> {
    pub notice: AcknowledgmentNotice,
    pub reset: F,
}

/// An outbound WhatsApp link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkResponse {
    pub url: String,
}

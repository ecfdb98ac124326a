//! 服务模块
//!
//! - [`http`] - 路由装配与 HTTP 中间件

pub mod http;

pub use self::http::{build_app, build_router};

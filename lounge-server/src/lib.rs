//! Meridian Escapes / Taboo Lounge - 海滨餐厅官网服务
//!
//! # 架构概述
//!
//! 服务端渲染的单页站点。所有交互 (订座弹窗、留言表单、菜单切换、
//! WhatsApp 跳转) 都是普通的表单和链接，不依赖前端脚本。
//!
//! # 模块结构
//!
//! ```text
//! lounge-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── render/        # Tera 模板和页面视图
//! ├── services/      # 路由装配、中间件
//! └── utils/         # 日志、输入校验
//! ```
//!
//! 订座 / 留言的业务逻辑在 `shared::intake`，本 crate 只负责 HTTP。

pub mod api;
pub mod core;
pub mod render;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use services::{build_app, build_router};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 `.env`，读取配置，按配置初始化日志
///
/// 生产环境输出 JSON 日志。
pub fn setup_environment() -> Config {
    match dotenv::dotenv() {
        Ok(path) => eprintln!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Failed to load .env: {e}"),
    }

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
  __  __           _     _ _
 |  \/  | ___ _ __(_) __| (_) __ _ _ __
 | |\/| |/ _ \ '__| |/ _` | |/ _` | '_ \
 | |  | |  __/ |  | | (_| | | (_| | | | |
 |_|  |_|\___|_|  |_|\__,_|_|\__,_|_| |_|
        Escapes · Taboo Lounge · Mirissa
"#
    );
}

use thiserror::Error;

use shared::AppError;

/// 启动/运行期错误 (请求级错误走 [`AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("模板加载失败: {0}")]
    Template(#[source] AppError),

    #[error("端口绑定失败 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务异常: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

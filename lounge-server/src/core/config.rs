use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | BIND_ADDR | 0.0.0.0 | 监听地址 |
/// | ENVIRONMENT | development | 运行环境 |
/// | ASSETS_DIR | assets | 静态文件目录 |
/// | LOG_LEVEL | info | 日志级别 / EnvFilter 表达式 |
/// | LOG_DIR | (未设置) | 日志文件目录 (按天滚动) |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | SITE_URL | http://localhost:8080 | 站点对外地址 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=3000 ASSETS_DIR=./lounge-server/assets cargo run -p lounge-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// 监听地址
    pub bind_addr: IpAddr,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 静态资源目录 (served under `/assets`)
    pub assets_dir: String,
    pub log_level: String,
    /// 日志文件目录，未设置时只输出到终端
    pub log_dir: Option<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// Canonical site URL used in page metadata
    pub site_url: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            bind_addr: std::env::var("BIND_ADDR")
                .ok()
                .and_then(|a| a.parse().ok())
                .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            assets_dir: std::env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(assets_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.assets_dir = assets_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

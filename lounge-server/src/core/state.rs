use std::sync::Arc;

use crate::core::error::{Result, ServerError};
use crate::core::Config;
use crate::render::Renderer;

/// 服务器状态
///
/// 只读共享: 配置 + 已编译的模板。Clone 只增加引用计数。
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub renderer: Arc<Renderer>,
}

impl ServerState {
    /// 初始化服务器状态 (编译模板)
    pub fn initialize(config: &Config) -> Result<Self> {
        let renderer = Renderer::new().map_err(ServerError::Template)?;
        tracing::debug!("Templates compiled");
        Ok(Self {
            config: Arc::new(config.clone()),
            renderer: Arc::new(renderer),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

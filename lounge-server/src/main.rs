use lounge_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    print_banner();

    tracing::info!(
        "Starting lounge-server (env: {}, assets: {})",
        config.environment,
        config.assets_dir
    );

    // 3. 初始化服务器状态 (模板编译失败直接退出)
    let state = ServerState::initialize(&config)?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    tracing::info!("Server stopped");
    Ok(())
}

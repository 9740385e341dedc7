//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::sync::Arc;

use coffeeshop_config::AppConfig;
use coffeeshop_errors::{AppError, AppResult};
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info};

use crate::health::{HealthChecker, HealthServer};
use crate::metrics::MetricsRecorder;
use crate::runtime::init_runtime;
use crate::server::GrpcServer;
use crate::shutdown::ShutdownController;

/// 运行 gRPC 服务
///
/// 这是所有微服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus 记录器
/// 4. 绑定 gRPC 监听地址（失败即退出）
/// 5. 启动健康检查 HTTP 服务器
/// 6. 调用用户提供的闭包注册 gRPC 服务
/// 7. 启动服务器，收到 Ctrl+C / SIGTERM 后 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use coffeeshop_bootstrap::run_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |_config, mut server| async move {
///         Ok(server.add_service(MyServiceServer::new(MyServiceImpl::new())))
///     }).await
/// }
/// ```
pub async fn run_server<F, Fut>(config_dir: &str, service_builder: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig, Server) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir).map_err(|e| AppError::config(e.to_string()))?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!(
        app_name = %config.app_name,
        app_version = %config.app_version,
        "Init {} {}",
        config.app_name,
        config.app_version
    );

    // 3. 初始化 Metrics 记录器
    let metrics = Arc::new(MetricsRecorder::install()?);

    // 4. 绑定 gRPC 地址
    let addr = config
        .server
        .socket_addr()
        .map_err(|e| AppError::config(e.to_string()))?;
    let health_addr = config
        .server
        .health_addr()
        .map_err(|e| AppError::config(e.to_string()))?;

    let server = GrpcServer::new(addr).with_drain_timeout(config.server.drain_timeout());
    let state = server.state();
    let listening = server.bind().await?;

    // 5. 关闭信号
    let shutdown = ShutdownController::new();
    let signal_handle = shutdown.watch_os_signals();

    // 6. 启动健康检查 HTTP 服务器
    let health_server = HealthServer::new(Arc::new(HealthChecker::new(state)), metrics, health_addr);
    let health_shutdown = shutdown.token();
    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve(health_shutdown).await {
            error!("Health server error: {}", e);
        }
    });

    // 7. 构建 gRPC 服务
    let router = match service_builder(config.clone(), Server::builder()).await {
        Ok(router) => router,
        Err(e) => {
            shutdown.shutdown();
            return Err(e.into());
        }
    };

    info!(addr = %listening.local_addr(), "Start server at {} ...", listening.local_addr());

    // 8. 启动服务器
    let result = listening.serve(router, shutdown.token()).await;

    // 9. 清理
    if !shutdown.is_shutdown() {
        error!("gRPC server exited before shutdown was requested");
    }
    shutdown.shutdown();
    if let Err(e) = health_handle.await {
        error!("Health server task failed: {}", e);
    }
    signal_handle.abort();

    result?;

    info!("Service stopped");

    Ok(())
}

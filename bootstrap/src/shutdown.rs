//! Graceful Shutdown

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::runtime::shutdown_signal;

/// Shutdown 控制器
///
/// 进程内唯一的取消源，gRPC 服务器、健康检查服务器和信号监听器共享同一个 token
#[derive(Clone, Default)]
pub struct ShutdownController {
    token: CancellationToken,
}

impl ShutdownController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 触发关闭
    pub fn shutdown(&self) {
        if !self.token.is_cancelled() {
            info!("Triggering shutdown");
        }
        self.token.cancel();
    }

    pub fn is_shutdown(&self) -> bool {
        self.token.is_cancelled()
    }

    /// 获取可传递给其他组件的取消 token
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// 等待关闭信号
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }

    /// 监听 Ctrl+C / SIGTERM，收到后触发关闭
    pub fn watch_os_signals(&self) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown_signal() => controller.shutdown(),
                _ = controller.wait() => {}
            }
        })
    }
}

//! gRPC 服务器生命周期
//!
//! `Created → Listening → Serving → Draining → Stopped`
//!
//! 取消后停止接受新连接，等待进行中的调用完成后再释放监听 socket。
//! 默认无限等待；设置 drain 超时后，超时即释放监听 socket 并返回，
//! 仍在运行的连接任务不会被取消。

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use coffeeshop_errors::{AppError, AppResult};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::server::Router;
use tracing::{info, warn};

/// 服务器生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Created,
    Listening,
    Serving,
    Draining,
    Stopped,
}

impl ServerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Listening => "listening",
            Self::Serving => "serving",
            Self::Draining => "draining",
            Self::Stopped => "stopped",
        }
    }
}

/// 尚未绑定地址的 gRPC 服务器
pub struct GrpcServer {
    addr: SocketAddr,
    drain_timeout: Option<Duration>,
    state: Arc<watch::Sender<ServerState>>,
}

impl GrpcServer {
    pub fn new(addr: SocketAddr) -> Self {
        let (state, _) = watch::channel(ServerState::Created);
        Self {
            addr,
            drain_timeout: None,
            state: Arc::new(state),
        }
    }

    /// 设置 drain 超时，`None` 表示无限等待进行中的调用
    ///
    /// 超时后只停止等待并释放监听 socket，进行中的调用不会被取消。
    pub fn with_drain_timeout(mut self, drain_timeout: Option<Duration>) -> Self {
        self.drain_timeout = drain_timeout;
        self
    }

    /// 订阅生命周期状态
    pub fn state(&self) -> watch::Receiver<ServerState> {
        self.state.subscribe()
    }

    /// 绑定监听地址
    ///
    /// 绑定失败直接返回 [`AppError::Bind`]，不会进入 Serving。
    pub async fn bind(self) -> AppResult<ListeningServer> {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| AppError::bind(self.addr, e))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| AppError::bind(self.addr, e))?;

        self.state.send_replace(ServerState::Listening);
        info!(%local_addr, "gRPC server listening");

        Ok(ListeningServer {
            listener,
            local_addr,
            drain_timeout: self.drain_timeout,
            state: self.state,
        })
    }
}

/// 已绑定地址、等待注册服务的 gRPC 服务器
pub struct ListeningServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    drain_timeout: Option<Duration>,
    state: Arc<watch::Sender<ServerState>>,
}

impl ListeningServer {
    /// 实际绑定的地址（绑定端口 0 时由系统分配）
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn state(&self) -> watch::Receiver<ServerState> {
        self.state.subscribe()
    }

    /// 开始处理请求，直到 `shutdown` 被取消且 drain 结束
    ///
    /// 监听 socket 随本方法的返回而释放，包括出错路径。
    pub async fn serve(self, router: Router, shutdown: CancellationToken) -> AppResult<()> {
        let Self {
            listener,
            local_addr,
            drain_timeout,
            state,
        } = self;

        let incoming = TcpListenerStream::new(listener);
        let signal = {
            let shutdown = shutdown.clone();
            let state = state.clone();
            async move {
                shutdown.cancelled().await;
                state.send_replace(ServerState::Draining);
                info!(%local_addr, "Shutdown requested, draining in-flight calls");
            }
        };

        state.send_replace(ServerState::Serving);
        info!(%local_addr, "gRPC server serving");

        let serve = router.serve_with_incoming_shutdown(incoming, signal);
        let result = match drain_timeout {
            None => serve.await.map_err(AppError::from),
            Some(deadline) => {
                tokio::pin!(serve);
                let deadline_elapsed = async {
                    shutdown.cancelled().await;
                    tokio::time::sleep(deadline).await;
                };
                tokio::select! {
                    res = &mut serve => res.map_err(AppError::from),
                    _ = deadline_elapsed => {
                        warn!(?deadline, %local_addr, "Drain deadline elapsed, releasing listener");
                        Ok(())
                    }
                }
            }
        };

        state.send_replace(ServerState::Stopped);
        info!(%local_addr, "gRPC server stopped, listener released");

        result
    }
}

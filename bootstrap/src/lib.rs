//! coffeeshop-bootstrap - 统一服务启动骨架
//!
//! 所有服务复用的启动逻辑：配置、日志、gRPC 服务器生命周期、健康检查与优雅关闭

mod health;
mod metrics;
mod reflection;
mod runtime;
mod server;
mod shutdown;
mod starter;

pub use health::*;
pub use self::metrics::*;
pub use reflection::*;
pub use runtime::*;
pub use server::*;
pub use shutdown::*;
pub use starter::*;

//! product-service - 商品目录 gRPC 服务入口

use std::sync::Arc;

use coffeeshop_bootstrap::{build_reflection, run_server};
use coffeeshop_errors::AppError;
use tracing::info;

use product_service::FILE_DESCRIPTOR_SET;
use product_service::api::ProductServiceImpl;
use product_service::application::ServiceHandler;
use product_service::domain::Catalog;
use product_service::proto::product_service_server::ProductServiceServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |_config, mut server| async move {
        info!("Initializing product service...");

        let catalog = Catalog::coffeeshop()
            .map_err(|e| AppError::internal(format!("Invalid catalog: {}", e)))?;
        info!(categories = catalog.len(), "Catalog loaded");

        let handler = Arc::new(ServiceHandler::new(Arc::new(catalog)));
        let service = ProductServiceImpl::new(handler);

        let reflection_service = build_reflection(vec![FILE_DESCRIPTOR_SET])?;

        Ok::<_, AppError>(
            server
                .add_service(ProductServiceServer::new(service))
                .add_service(reflection_service),
        )
    })
    .await
}

//! gRPC service implementation

use std::sync::Arc;
use std::time::Instant;

use coffeeshop_bootstrap::record_grpc_request;
use tonic::{Request, Response, Status};
use tracing::info;

use crate::application::{ListCategoryTypesQuery, ListItemsByTypeQuery, ServiceHandler};
use crate::proto::product_service_server::{ProductService, SERVICE_NAME};
use crate::proto::*;

use super::conversions::*;

pub struct ProductServiceImpl {
    handler: Arc<ServiceHandler>,
}

impl ProductServiceImpl {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

#[tonic::async_trait]
impl ProductService for ProductServiceImpl {
    async fn list_category_types(
        &self,
        _request: Request<ListCategoryTypesRequest>,
    ) -> Result<Response<ListCategoryTypesResponse>, Status> {
        info!("GET: ListCategoryTypes");
        let started = Instant::now();

        let category_types = self
            .handler
            .list_category_types(ListCategoryTypesQuery)
            .into_iter()
            .map(category_type_to_proto)
            .collect();

        record_grpc_request(
            SERVICE_NAME,
            "ListCategoryTypes",
            "ok",
            started.elapsed().as_secs_f64() * 1000.0,
        );

        Ok(Response::new(ListCategoryTypesResponse { category_types }))
    }

    async fn list_items_by_type(
        &self,
        request: Request<ListItemsByTypeRequest>,
    ) -> Result<Response<ListItemsByTypeResponse>, Status> {
        info!("GET: ListItemsByType");
        let started = Instant::now();

        let req = request.into_inner();
        let query = ListItemsByTypeQuery::new(req.item_types);

        let items = self
            .handler
            .list_items_by_type(&query)
            .into_iter()
            .map(item_price_to_proto)
            .collect();

        record_grpc_request(
            SERVICE_NAME,
            "ListItemsByType",
            "ok",
            started.elapsed().as_secs_f64() * 1000.0,
        );

        Ok(Response::new(ListItemsByTypeResponse { items }))
    }
}

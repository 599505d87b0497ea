//! gRPC implementation of `user_v1.UserV1`.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use uuid::Uuid;

use super::converter::{create_request_to_domain, update_request_to_domain, user_to_get_response};
use crate::service::UserService;
use proto::user::{
    user_v1_server::UserV1, CreateRequest, CreateResponse, DeleteRequest, DeleteResponse,
    GetRequest, GetResponse, UpdateRequest, UpdateResponse,
};

/// gRPC service wrapper for UserService.
pub struct UserGrpcService {
    service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl UserV1 for UserGrpcService {
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        let req = create_request_to_domain(request.into_inner());

        let id = self.service.create_user(req).await.map_err(Status::from)?;
        Ok(Response::new(CreateResponse { id: id.to_string() }))
    }

    async fn get(&self, request: Request<GetRequest>) -> Result<Response<GetResponse>, Status> {
        let id = parse_uuid(&request.get_ref().id)?;

        let user = self.service.get_user(id).await.map_err(Status::from)?;
        Ok(Response::new(user_to_get_response(&user)))
    }

    async fn update(
        &self,
        request: Request<UpdateRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        let req = request.into_inner();
        let id = parse_uuid(&req.id)?;

        self.service
            .update_user(id, update_request_to_domain(req))
            .await
            .map_err(Status::from)?;
        Ok(Response::new(UpdateResponse {}))
    }

    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let id = parse_uuid(&request.get_ref().id)?;

        self.service.delete_user(id).await.map_err(Status::from)?;
        Ok(Response::new(DeleteResponse {}))
    }
}

/// Parse UUID from string.
fn parse_uuid(s: &str) -> Result<Uuid, Status> {
    Uuid::parse_str(s).map_err(|_| Status::invalid_argument("Invalid UUID format"))
}

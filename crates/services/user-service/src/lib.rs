//! User Service Library
//!
//! User account management (create, get, update, delete) exposed over gRPC
//! and a JSON HTTP API. Both adapters share one `UserService`, which sits on
//! a `UserRepository`.

pub mod config;
pub mod grpc;
pub mod http;
pub mod infra;
pub mod repository;
pub mod service;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{StorageBackend, UserServiceConfig};
use crate::grpc::UserGrpcService;
use crate::http::{create_router, AppState};
use crate::infra::Database;
use crate::repository::{InMemoryUserStore, UserRepository, UserStore};
use crate::service::{UserManager, UserService};

/// Build the repository selected by the configuration.
pub async fn build_repository(
    config: &UserServiceConfig,
) -> Result<Arc<dyn UserRepository>, Box<dyn std::error::Error>> {
    let repo: Arc<dyn UserRepository> = match config.storage {
        StorageBackend::Postgres => {
            let db = Database::connect(&config.database).await?;
            Arc::new(UserStore::new(db.get_connection()))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data is lost on exit");
            Arc::new(InMemoryUserStore::new())
        }
    };

    Ok(repo)
}

/// Run the gRPC and HTTP servers until either stops.
pub async fn run(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let user_repo = build_repository(&config).await?;
    let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(user_repo));

    let host = &config.server.host;
    let grpc_addr: SocketAddr = format!("{}:{}", host, config.server.grpc_port).parse()?;
    let http_addr: SocketAddr = format!("{}:{}", host, config.server.http_port).parse()?;

    // gRPC
    let grpc_service = UserGrpcService::new(user_service.clone());
    let grpc_server = Server::builder()
        .add_service(proto::UserV1Server::new(grpc_service))
        .serve(grpc_addr);
    info!("gRPC listening on {}", grpc_addr);

    // HTTP
    let app = create_router(AppState::new(user_service)).layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    let http_server = axum::serve(listener, app).into_future();
    info!("HTTP listening on {}", http_addr);

    tokio::select! {
        result = grpc_server => result?,
        result = http_server => result?,
    }

    Ok(())
}

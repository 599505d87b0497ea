//! gRPC API adapter.

pub mod converter;
mod user_grpc;

pub use user_grpc::UserGrpcService;

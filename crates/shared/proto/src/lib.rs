//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for the
//! `user_v1.UserV1` service (create, get, update, delete).

/// User service definitions.
pub mod user {
    tonic::include_proto!("user_v1");
}

// Re-export commonly used items
pub use user::user_v1_client::UserV1Client;
pub use user::user_v1_server::{UserV1, UserV1Server};

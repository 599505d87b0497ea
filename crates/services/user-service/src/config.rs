//! User service configuration.

use std::env;

use clap::ValueEnum;

use common::{DatabaseConfig, ServerConfig};

/// Where user records live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// PostgreSQL through the connection pool
    #[default]
    Postgres,
    /// Process-local map, lost on exit
    Memory,
}

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub storage: StorageBackend,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let db_defaults = DatabaseConfig::default();
        let server_defaults = ServerConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(db_defaults.url),
                max_connections: parse_var("USER_SERVICE_DB_MAX_CONNECTIONS")
                    .unwrap_or(db_defaults.max_connections),
                min_connections: parse_var("USER_SERVICE_DB_MIN_CONNECTIONS")
                    .unwrap_or(db_defaults.min_connections),
                acquire_timeout_secs: parse_var("USER_SERVICE_DB_ACQUIRE_TIMEOUT_SECS")
                    .unwrap_or(db_defaults.acquire_timeout_secs),
                connect_timeout_secs: parse_var("USER_SERVICE_DB_CONNECT_TIMEOUT_SECS")
                    .unwrap_or(db_defaults.connect_timeout_secs),
            },
            server: ServerConfig {
                host: env::var("USER_SERVICE_HOST").unwrap_or(server_defaults.host),
                grpc_port: parse_var("USER_SERVICE_GRPC_PORT")
                    .unwrap_or(server_defaults.grpc_port),
                http_port: parse_var("USER_SERVICE_HTTP_PORT")
                    .unwrap_or(server_defaults.http_port),
            },
            storage: StorageBackend::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

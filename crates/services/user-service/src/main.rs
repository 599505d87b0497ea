//! User Service - gRPC and HTTP server for user management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::config::{StorageBackend, UserServiceConfig};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User management microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gRPC and HTTP servers
    Serve {
        /// Bind address (overrides USER_SERVICE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// gRPC port (overrides USER_SERVICE_GRPC_PORT)
        #[arg(long)]
        grpc_port: Option<u16>,
        /// HTTP port (overrides USER_SERVICE_HTTP_PORT)
        #[arg(long)]
        http_port: Option<u16>,
        /// Storage backend
        #[arg(long, value_enum, default_value_t = StorageBackend::Postgres)]
        storage: StorageBackend,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            grpc_port,
            http_port,
            storage,
        } => {
            let mut config = UserServiceConfig::from_env();
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = grpc_port {
                config.server.grpc_port = port;
            }
            if let Some(port) = http_port {
                config.server.http_port = port;
            }
            config.storage = storage;

            user_service_lib::run(config).await?;
        }
    }

    Ok(())
}

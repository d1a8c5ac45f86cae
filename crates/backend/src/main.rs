#![allow(clippy::type_complexity)]

pub mod domain;
pub mod handlers;
pub mod projections;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    // config.toml next to the executable, or the embedded default
    let config = shared::config::load_config()?;

    let db_path = shared::config::get_database_path(&config)?;
    shared::data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    if config.database.seed_demo_data {
        shared::data::seed::seed_demo_data().await?;
    }

    // Validate categories against the taxonomy, then register pages for the survivors
    let platform = system::initialization::sqlite_platform();
    let app =
        system::initialization::bootstrap(&config.admin, &config.categories, platform).await?;

    let secret = Arc::new(config.auth.jwt_secret.clone());
    if config.auth.print_dev_token {
        let token = system::auth::jwt::generate_access_token(
            "admin",
            "admin",
            vec![config.admin.capability.clone()],
            &secret,
        )?;
        tracing::info!("Development token (Authorization header): Bearer {}", token);
    }

    let router = routes::configure_routes(app, &config.admin, secret);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, router).await?;

    Ok(())
}

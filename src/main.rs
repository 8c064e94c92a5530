use anyhow::Result;
use run_coach::api::routes::create_routes;
use run_coach::config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    // Create the application routes
    let app = create_routes();

    // Start the server
    let listener = TcpListener::bind(config.server_address()).await?;
    info!("Run Coach server starting on http://{}", config.server_address());
    info!("Environment: {}", config.environment);

    axum::serve(listener, app).await?;

    Ok(())
}

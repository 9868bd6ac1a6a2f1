/**
 * Inngate Server Entry Point
 *
 * Starts the edge gateway: loads configuration (dotenv honored), wires up
 * tracing, assembles the app and serves it.
 */

use inngate::gateway::server::config::GatewayConfig;
use inngate::gateway::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = GatewayConfig::load()?;
    let addr: std::net::SocketAddr = config.listen_addr().parse()?;

    let app = create_app(config)?;

    tracing::info!("Starting inngate gateway on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

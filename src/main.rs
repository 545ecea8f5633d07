use bourse::config::Config;
use bourse::{app, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bourse=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting Bourse server on {}", addr);

    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Bourse server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Router(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "paddock failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::AppConfig::from_env()?;
    let state = state::AppState::new(&config)?;
    let app = routes::app(state).map_err(StartupError::Router)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, backend = %config.backend_url, "paddock listening");
    axum::serve(listener, app).await?;
    Ok(())
}

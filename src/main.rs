mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;

    let db = startup::connect_to_database(&config)
        .await
        .inspect_err(|e| tracing::error!("Failed to initialize database: {}", e))?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router::app(AppState::new(db))).await?;

    Ok(())
}

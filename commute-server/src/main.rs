use tracing::info;
use tracing_subscriber::EnvFilter;

use commute_server::config::AppConfig;
use commute_server::darwin::DarwinClient;
use commute_server::weather::WeatherClient;
use commute_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Missing credentials only warn; calls then fail as unauthorized.
    let config = AppConfig::from_env()?;

    let darwin = DarwinClient::new(config.darwin_config())?;
    let weather = WeatherClient::new(config.weather_config())?;

    let state = AppState::new(darwin, weather, config.timetable.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "commute server listening");
    info!("endpoints: GET /health, ANY /trains, ANY /localinfo");

    axum::serve(listener, app).await?;

    Ok(())
}

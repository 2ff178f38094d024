use swarcure_server::config;
use swarcure_server::state::{self, AppState};
use swarcure_server::telemetry;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = telemetry::with_startup_logging(std::io::stdout, config::load_config)?;
    telemetry::init_tracing(config.log_format);

    let store = state::build_store(&config.storage);
    let app = swarcure_server::app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, storage = ?config.storage, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}

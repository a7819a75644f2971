use tracing_subscriber::{EnvFilter, fmt};

use attendance_productivity::shell::config::Config;
use attendance_productivity::shell::http::router;
use attendance_productivity::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let state = AppState::in_memory(config.policy());
    let app = router(state, config.upload_limit_bytes);

    tracing::info!(
        leaves_allowed = config.leaves_allowed,
        "attendance endpoint: http://{}/api/upload",
        config.server_addr
    );
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

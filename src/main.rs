use application_tracker::{
    config::{get_config, init_config},
    AppState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    init_config()?;
    let config = get_config();

    let state = AppState::open(config).await?;
    info!("Opened application store at {}", config.database_url);

    let view = state.tracker_service.load().await?;
    info!("Loaded {} tracked applications", view.applications.len());

    if view.report.is_empty() {
        info!("No Data Available");
    } else {
        for slice in view.chart() {
            info!(
                color = %slice.color,
                "{}: {} ({})",
                slice.label,
                slice.count,
                slice.percentage_label()
            );
        }
        tracing::debug!("{}", serde_json::to_string(&view.report.slices())?);
    }

    state.close().await;
    Ok(())
}

use crate::cli::ServeArgs;
use crate::infra::{selection_store, AppState};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use points_planner::config::AppConfig;
use points_planner::error::AppError;
use points_planner::telemetry;
use std::sync::atomic::Ordering;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(static_dir) = args.static_dir.take() {
        config.storage.static_dir = static_dir;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let state = AppState::new(&config, prometheus_handle, selection_store(&config));
    let readiness_flag = state.readiness.clone();

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        static_dir = %config.storage.static_dir.display(),
        "points strategy planner ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

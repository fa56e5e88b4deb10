use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::appraisal_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ecrp::config::AppConfig;
use ecrp::error::AppError;
use ecrp::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?.with_server_overrides(args.host, args.port);

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState::new(readiness_flag.clone(), prometheus_handle);

    let app = appraisal_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ECR-P appraisal service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

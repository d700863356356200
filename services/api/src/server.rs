use crate::cli::ServeArgs;
use crate::infra::{build_controller, AppState, InMemoryAccountStore};
use crate::routes::with_signup_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use signup::config::AppConfig;
use signup::error::AppError;
use signup::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryAccountStore::default());
    let controller = Arc::new(build_controller(store));

    let app = with_signup_routes(controller)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "sign-up service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

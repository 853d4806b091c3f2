use crate::cli::ServeArgs;
use crate::infra::{AppState, TracingObserver};
use crate::routes::with_simulation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use card_payoff::config::AppConfig;
use card_payoff::error::AppError;
use card_payoff::simulation::PayoffSimulationService;
use card_payoff::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let simulation_service = Arc::new(PayoffSimulationService::new(Arc::new(TracingObserver)));

    let app = with_simulation_routes(simulation_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(environment = config.environment.label(), %addr, "card payoff simulator ready");

    axum::serve(listener, app).await?;
    Ok(())
}

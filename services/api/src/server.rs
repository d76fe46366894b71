use crate::cli::ServeArgs;
use crate::infra::{build_quoter, AppState, InMemoryPlanRepository};
use crate::routes::with_plan_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pawplan::config::AppConfig;
use pawplan::error::AppError;
use pawplan::plans::PlanService;
use pawplan::telemetry;
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

    let quoter = build_quoter(&config.pricing, None)?;
    let repository = Arc::new(InMemoryPlanRepository::default());
    let plan_service = Arc::new(PlanService::new(repository, quoter));

    let app = with_plan_routes(plan_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        first_box_percent = config.pricing.discounts.first_box_percent,
        additional_dog_percent = config.pricing.discounts.additional_dog_percent,
        "plan builder api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

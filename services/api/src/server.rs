use crate::cli::ServeArgs;
use crate::infra::{seeded_store, AppState, InMemoryBookingStore};
use crate::routes::with_front_desk_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use frontdesk::config::AppConfig;
use frontdesk::desk::{CredibilityService, ServiceError};
use frontdesk::error::AppError;
use frontdesk::telemetry;
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

    let store = if config.front_desk.seed_demo_data {
        let store = seeded_store().map_err(ServiceError::from)?;
        let guests = store.guests().map_err(ServiceError::from)?;
        info!(guests = guests.len(), "seeded in-memory front desk");
        store
    } else {
        InMemoryBookingStore::default()
    };
    let service = Arc::new(CredibilityService::new(Arc::new(store)));

    let app = with_front_desk_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "front desk credibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

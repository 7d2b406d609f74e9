use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryDogRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use uchinoko::config::AppConfig;
use uchinoko::diagnosis::DiagnosisEngine;
use uchinoko::error::AppError;
use uchinoko::profiles::DogProfileService;
use uchinoko::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(DiagnosisEngine::standard());
    let repository = Arc::new(InMemoryDogRepository::default());
    let profile_service = Arc::new(DogProfileService::new(
        repository,
        engine.clone(),
        config.profiles,
    ));

    let app = with_service_routes(profile_service, engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_diary_photos = config.profiles.max_diary_photos,
        "dog diagnosis service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

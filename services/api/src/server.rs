use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryClientDirectory, InMemoryUserStore, TableCreditScorer};
use crate::routes::with_registration_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use user_onboarding::config::AppConfig;
use user_onboarding::error::AppError;
use user_onboarding::registration::UserRegistrationService;
use user_onboarding::telemetry;

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

    let directory = Arc::new(InMemoryClientDirectory::seeded());
    let seeded_clients = directory.clients().len();
    let registration_service = Arc::new(UserRegistrationService::new(
        directory,
        Arc::new(TableCreditScorer::seeded()),
        Arc::new(InMemoryUserStore::default()),
        config.registration.clone(),
    ));

    let app = with_registration_routes(registration_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded_clients,
        minimum_age = config.registration.minimum_age,
        credit_threshold = config.registration.minimum_credit_limit,
        "user onboarding service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

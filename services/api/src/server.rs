use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionStore, OfflineRankingGateway, RankingBackend};
use crate::routes::with_wizard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};
use vetan::config::AppConfig;
use vetan::error::AppError;
use vetan::telemetry;
use vetan::workflows::matching::{Catalog, GeminiGateway, MatchWizardService};

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

    let catalog = match &config.catalog_csv {
        Some(path) => {
            let catalog = Catalog::from_csv_path(path)?;
            info!(path = %path.display(), entries = catalog.len(), "catalog loaded from CSV");
            catalog
        }
        None => Catalog::builtin(),
    };

    let gateway = if config.ranking.api_key.is_some() {
        RankingBackend::Gemini(GeminiGateway::from_config(&config.ranking)?)
    } else {
        warn!("GEMINI_API_KEY is not set; rankings degrade to the full catalog");
        RankingBackend::Offline(OfflineRankingGateway)
    };

    let store = Arc::new(InMemorySessionStore::default());
    let wizard_service = Arc::new(MatchWizardService::new(
        store,
        Arc::new(gateway),
        Arc::new(catalog),
    ));

    let app = with_wizard_routes(wizard_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "internship match orchestrator ready");

    axum::serve(listener, app).await?;
    Ok(())
}

use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sales_dashboard_core::chart::{ChartSpec, ChartTable};
use sales_dashboard_core::storage::sales::{PgSalesSource, SalesSource, SalesTable};

mod pages;

use pages::{ChartPage, DaysPage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = sales_dashboard_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let sales = match connect_sales_source(&settings).await {
        Ok(source) => Some(source),
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "sales_db unavailable; starting dashboard in degraded mode");
            None
        }
    };

    let app = router(AppState { sales });

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, table = %settings.sales_table, "dashboard listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn connect_sales_source(
    settings: &sales_dashboard_core::config::Settings,
) -> anyhow::Result<Arc<dyn SalesSource>> {
    let table = SalesTable::parse(&settings.sales_table)?;
    let db_url = settings.require_sales_database_url()?;
    let pool = sales_dashboard_core::storage::connect_read_only(db_url).await?;
    Ok(Arc::new(PgSalesSource::new(pool, table)))
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(sales_dashboard))
        .route("/sales", get(sales_dashboard))
        .route("/sales/days", get(sales_days))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Clone)]
struct AppState {
    sales: Option<Arc<dyn SalesSource>>,
}

async fn sales_dashboard(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let Some(sales) = &state.sales else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let page = chart_page(sales.as_ref()).await.map_err(internal_error)?;
    Ok(Html(page.render()))
}

async fn sales_days(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let Some(sales) = &state.sales else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let page = days_page(sales.as_ref()).await.map_err(internal_error)?;
    Ok(Html(page.render()))
}

async fn chart_page(sales: &dyn SalesSource) -> anyhow::Result<ChartPage> {
    let records = sales.fetch_all().await?;
    let table = ChartTable::from_records(&records);
    let chart = ChartSpec::bar_chart(&table).to_json()?;
    tracing::debug!(rows = table.len(), "built sales chart");
    Ok(ChartPage { chart })
}

async fn days_page(sales: &dyn SalesSource) -> anyhow::Result<DaysPage> {
    let days = sales.fetch_all().await?;
    Ok(DaysPage { days })
}

fn internal_error(err: anyhow::Error) -> StatusCode {
    sentry_anyhow::capture_anyhow(&err);
    tracing::error!(error = %err, "sales dashboard request failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(
    settings: &sales_dashboard_core::config::Settings,
) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

use crate::app::dashboard_use_case::DashboardUseCase;
use crate::apis::SourceError;
use crate::pipeline::DisasterMap;
use crate::types::{DisasterFilter, DisasterRecord};
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use hyper::Server;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<DashboardUseCase>,
    pub metrics: Option<PrometheusHandle>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub disaster: Option<String>,
}

impl DashboardQuery {
    fn filter(&self) -> Result<DisasterFilter, Response> {
        match self.disaster.as_deref() {
            None | Some("") => Ok(DisasterFilter::All),
            Some(raw) => raw
                .parse()
                .map_err(|e: crate::error::MonitorError| {
                    (StatusCode::BAD_REQUEST, e.to_string()).into_response()
                }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub count: usize,
    pub records: Vec<DisasterRecord>,
    pub errors: Vec<SourceError>,
}

#[derive(Debug, Serialize)]
pub struct MapResponse {
    pub filter: DisasterFilter,
    pub map: DisasterMap,
    pub errors: Vec<SourceError>,
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "disaster-monitor",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Full dashboard page; every request fetches fresh data
async fn index(State(state): State<AppState>, Query(query): Query<DashboardQuery>) -> Response {
    let filter = match query.filter() {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    let dashboard = state.use_case.run(filter, Utc::now()).await;
    match dashboard.render_html() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Dashboard rendering failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// The unified table is never narrowed by category, so no `disaster` parameter here
async fn records(State(state): State<AppState>) -> Response {
    let dashboard = state.use_case.run(DisasterFilter::All, Utc::now()).await;
    Json(RecordsResponse {
        count: dashboard.records.len(),
        records: dashboard.records,
        errors: dashboard.errors,
    })
    .into_response()
}

async fn map(State(state): State<AppState>, Query(query): Query<DashboardQuery>) -> Response {
    let filter = match query.filter() {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    let dashboard = state.use_case.run(filter, Utc::now()).await;
    Json(MapResponse {
        filter,
        map: dashboard.map,
        errors: dashboard.errors,
    })
    .into_response()
}

async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}

/// Create the HTTP router with all routes
pub fn create_server(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/api/records", get(records))
        .route("/api/map", get(map))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = create_server(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Dashboard running on http://localhost:{}", port);
    info!("Health check: http://localhost:{}/health", port);
    info!("Records API: http://localhost:{}/api/records", port);

    Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}

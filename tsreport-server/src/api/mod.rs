//! HTTP API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tsreport_core::ingest::{scan_directory, RecordSet};
use tsreport_core::query::{chart_series, latest_date, listing, size_per_database};
use tsreport_core::TablespaceRecord;

use crate::pages;

/// Application state: the drop directory every request re-scans
pub type AppState = Arc<PathBuf>;

/// Series shown when the chart page passes no explicit selectors
const DEFAULT_CHART_DATABASE: &str = "CFTWORK";
const DEFAULT_CHART_TABLESPACE: &str = "I_USR";

/// Create the API router
pub fn create_router(data_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health))
        .route("/ping", get(ping))

        // Database size report
        .route("/dblist", get(dblist_page))
        .route("/dblist.json", get(dblist_json))

        // Tablespace listing report
        .route("/tslist", get(tslist_page))
        .route("/tslist/", get(tslist_page))
        .route("/tslist/dbname/:dbname", get(tslist_page))
        .route("/tslist/date/:date", get(tslist_page))

        // Listing data consumed by the report pages
        .route("/api/tslist", get(tslist_json))
        .route("/api/tslist/", get(tslist_json))
        .route("/api/tslist/dbname/:dbname", get(tslist_by_database))
        .route("/api/tslist/date/:date", get(tslist_by_date))

        // Allocation history chart
        .route("/chart", get(chart_page))
        .route("/chart.json", get(chart_json))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(data_dir))
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DbListParams {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartParams {
    dbname: Option<String>,
    tsname: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// One row of the database size report
#[derive(Debug, Serialize)]
pub struct DbSizeRow {
    pub dbname: String,
    pub dbsize: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: tsreport_core::VERSION.to_string(),
    })
}

async fn ping() -> &'static str {
    "pong"
}

async fn dblist_page() -> Html<&'static str> {
    Html(pages::DBLIST)
}

async fn tslist_page() -> Html<&'static str> {
    Html(pages::TSLIST)
}

async fn chart_page() -> Html<&'static str> {
    Html(pages::CHART)
}

async fn dblist_json(
    State(data_dir): State<AppState>,
    Query(params): Query<DbListParams>,
) -> Result<Json<Vec<DbSizeRow>>, (StatusCode, Json<ErrorResponse>)> {
    let set = rescan(&data_dir)?;
    Ok(Json(db_size_rows(&set.records, params.date)))
}

async fn tslist_json(
    State(data_dir): State<AppState>,
) -> Result<Json<Vec<TablespaceRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let set = rescan(&data_dir)?;
    Ok(Json(listing(&set.records, None, None)))
}

async fn tslist_by_database(
    State(data_dir): State<AppState>,
    Path(dbname): Path<String>,
) -> Result<Json<Vec<TablespaceRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let set = rescan(&data_dir)?;
    Ok(Json(listing(&set.records, None, Some(&dbname))))
}

async fn tslist_by_date(
    State(data_dir): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<TablespaceRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let set = rescan(&data_dir)?;
    Ok(Json(listing(&set.records, Some(&date), None)))
}

async fn chart_json(
    State(data_dir): State<AppState>,
    Query(params): Query<ChartParams>,
) -> Result<Json<Vec<i64>>, (StatusCode, Json<ErrorResponse>)> {
    let set = rescan(&data_dir)?;
    Ok(Json(chart_values(&set.records, params.dbname, params.tsname)))
}

// ============================================================================
// Helpers
// ============================================================================

/// One full ingestion pass; the record set lives only for this request.
fn rescan(data_dir: &std::path::Path) -> Result<RecordSet, (StatusCode, Json<ErrorResponse>)> {
    scan_directory(data_dir).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })
}

/// Size-per-database rows for the requested date, defaulting to the newest
/// snapshot date present. Sorted by name so the report is stable.
fn db_size_rows(records: &[TablespaceRecord], date: Option<String>) -> Vec<DbSizeRow> {
    let as_of = date
        .or_else(|| latest_date(records).map(str::to_string))
        .unwrap_or_default();

    let mut rows: Vec<DbSizeRow> = size_per_database(records, &as_of)
        .into_iter()
        .map(|(dbname, dbsize)| DbSizeRow { dbname, dbsize })
        .collect();
    rows.sort_by(|a, b| a.dbname.cmp(&b.dbname));
    rows
}

/// Chart series for the requested selectors, falling back to the pair
/// the stock chart page expects.
fn chart_values(
    records: &[TablespaceRecord],
    dbname: Option<String>,
    tsname: Option<String>,
) -> Vec<i64> {
    let dbname = dbname.unwrap_or_else(|| DEFAULT_CHART_DATABASE.to_string());
    let tsname = tsname.unwrap_or_else(|| DEFAULT_CHART_TABLESPACE.to_string());
    chart_series(records, &dbname, &tsname)
}

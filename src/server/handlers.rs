use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::capitals::{self, CapitalMatch, CountryKey};
use crate::enrich::{EnrichedFact, FactSource};

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug)]
pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── Query parameters ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct StateQuery {
    pub country: Option<String>,
    pub state: Option<String>,
}

#[derive(Deserialize)]
pub struct CountryQuery {
    pub country: Option<String>,
}

#[derive(Deserialize)]
pub struct CapitalQuery {
    pub capital: Option<String>,
}

/// Unsupported keys are `None`; an omitted key is the server default.
fn country_param(state: &AppState, raw: Option<&str>) -> Option<CountryKey> {
    match raw {
        Some(raw) => CountryKey::parse(raw),
        None => Some(state.default_country),
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApiError> {
    let value = value.unwrap_or("").trim();
    if value.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, format!("Missing {} parameter", name)));
    }
    Ok(value)
}

fn find_match(state: &AppState, params: &StateQuery) -> Result<CapitalMatch, ApiError> {
    let query = required(params.state.as_deref(), "state")?;
    country_param(state, params.country.as_deref())
        .and_then(|country| capitals::resolve(query, country))
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "Capital not found"))
}

/// Run enrichment on the blocking pool; the provider does synchronous HTTP.
async fn enrich_blocking(state: Arc<AppState>, capital: String) -> Result<EnrichedFact, ApiError> {
    tokio::task::spawn_blocking(move || {
        let mut enricher = state.enricher();
        enricher.enrich(&capital)
    })
    .await
    .map_err(|e| {
        error!("Enrichment task failed: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Enrichment failed")
    })
}

/// Short description of a handler result for the request log.
fn outcome<T>(result: &Result<T, ApiError>, describe: impl FnOnce(&T) -> String) -> String {
    match result {
        Ok(value) => describe(value),
        Err(ApiError(status, msg)) => format!("{} {}", status.as_u16(), msg),
    }
}

fn log_request(route: &str, detail: &str, outcome: &str, start: Instant) {
    info!(
        "GET {} {} -> {} ({:.1}ms)",
        route,
        detail,
        outcome,
        start.elapsed().as_secs_f64() * 1000.0,
    );
}

// ─── Static files ────────────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/capital ────────────────────────────────────────────

pub async fn capital(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StateQuery>,
) -> Result<Json<CapitalMatch>, ApiError> {
    let start = Instant::now();
    let result = find_match(&state, &params);
    let summary = outcome(&result, |found| found.capital.clone());
    log_request("/api/capital", params.state.as_deref().unwrap_or(""), &summary, start);
    result.map(Json)
}

// ─── GET /api/enriched ───────────────────────────────────────────

pub async fn enriched(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CapitalQuery>,
) -> Result<Json<EnrichedFact>, ApiError> {
    let start = Instant::now();
    let result = match required(params.capital.as_deref(), "capital") {
        Ok(capital) => enrich_blocking(state, capital.to_string()).await,
        Err(e) => Err(e),
    };
    let summary = outcome(&result, |fact| fact.source.to_string());
    log_request("/api/enriched", params.capital.as_deref().unwrap_or(""), &summary, start);
    result.map(Json)
}

// ─── GET /api/random ─────────────────────────────────────────────

pub async fn random(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountryQuery>,
) -> Result<Json<CapitalMatch>, ApiError> {
    let start = Instant::now();
    let result = country_param(&state, params.country.as_deref())
        .and_then(|country| capitals::random_pick(country, &mut rand::thread_rng()))
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "No data for country"));
    let summary = outcome(&result, |picked| picked.region.clone());
    log_request("/api/random", params.country.as_deref().unwrap_or(""), &summary, start);
    result.map(Json)
}

// ─── GET /api/lookup ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct LookupResponse {
    pub state: String,
    pub capital: String,
    pub fact: String,
    pub wikipedia_summary: String,
    pub source: FactSource,
}

pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StateQuery>,
) -> Result<Json<LookupResponse>, ApiError> {
    let start = Instant::now();
    let result = lookup_enriched(state, &params).await;
    let summary = outcome(&result, |r| format!("{} ({})", r.capital, r.source));
    log_request("/api/lookup", params.state.as_deref().unwrap_or(""), &summary, start);
    result.map(Json)
}

async fn lookup_enriched(state: Arc<AppState>, params: &StateQuery) -> Result<LookupResponse, ApiError> {
    let found = find_match(&state, params)?;
    let fact = enrich_blocking(state, found.capital.clone()).await?;

    Ok(LookupResponse {
        state: found.region,
        capital: found.capital,
        fact: fact.fact,
        wikipedia_summary: fact.summary,
        source: fact.source,
    })
}

// ─── GET /api/regions ────────────────────────────────────────────

#[derive(Serialize)]
pub struct RegionsResponse {
    pub country: CountryKey,
    pub display_name: &'static str,
    pub regions: Vec<CapitalMatch>,
}

pub async fn regions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountryQuery>,
) -> Result<Json<RegionsResponse>, ApiError> {
    let start = Instant::now();
    let result = country_param(&state, params.country.as_deref())
        .map(|country| RegionsResponse {
            country,
            display_name: country.display_name(),
            regions: capitals::regions(country).iter().map(CapitalMatch::from).collect(),
        })
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "No data for country"));
    let summary = outcome(&result, |r| format!("{} regions", r.regions.len()));
    log_request("/api/regions", params.country.as_deref().unwrap_or(""), &summary, start);
    result.map(Json)
}

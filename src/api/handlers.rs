//! API Handlers
//!
//! HTTP request handlers for each checker endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::Mutex;
use tracing::info;

use crate::catalog::{Catalog, CountryConfig, CountryInfo, CountryLookup};
use crate::checker::{check_many_shared, CheckOptions, Checker};
use crate::config::Config;
use crate::error::{CheckerError, Result};
use crate::models::{
    BatchCheckRequest, BatchCheckResponse, CacheConfigRequest, CacheStatsResponse, CentreSummary,
    CityQuery, HealthResponse, MessageResponse, StatsResponse,
};
use crate::outcome::CheckOutcome;
use crate::probe::HttpProbe;
use crate::statistics::CountryReport;

/// Application state shared across all handlers.
///
/// The checker sits behind one async mutex, held for the whole of a check,
/// so probes run strictly one after another.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<Mutex<Checker>>,
}

impl AppState {
    /// Creates a new AppState around an existing checker.
    pub fn new(checker: Checker) -> Self {
        Self {
            checker: Arc::new(Mutex::new(checker)),
        }
    }

    /// Creates a new AppState from configuration, probing over HTTP.
    pub fn from_config(config: &Config) -> Result<Self> {
        let probe = HttpProbe::new(Duration::from_secs(config.probe_timeout))?;
        let checker = Checker::new(config.checker_options(), Arc::new(probe));
        Ok(Self::new(checker))
    }
}

/// Handler for GET /check/:country
pub async fn check_handler(
    State(state): State<AppState>,
    Path(country): Path<String>,
    Query(options): Query<CheckOptions>,
) -> Result<Json<CheckOutcome>> {
    let mut checker = state.checker.lock().await;
    let outcome = checker.check(&country, &options).await?;
    Ok(Json(outcome))
}

/// Handler for POST /check
pub async fn batch_check_handler(
    State(state): State<AppState>,
    Json(req): Json<BatchCheckRequest>,
) -> Result<Json<BatchCheckResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CheckerError::InvalidRequest(error_msg));
    }

    let results = check_many_shared(&state.checker, &req.countries, &req.options()).await;

    Ok(Json(BatchCheckResponse::new(results)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let checker = state.checker.lock().await;

    Json(StatsResponse {
        statistics: checker.statistics(),
        success_rate: checker.success_rate(),
        cache_hit_rate: checker.cache_hit_rate(),
    })
}

/// Handler for GET /stats/:country
pub async fn country_stats_handler(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<CountryReport>> {
    let checker = state.checker.lock().await;
    checker
        .country_statistics(&country)
        .map(Json)
        .ok_or_else(|| CheckerError::NotFound(format!("No statistics for {}", country)))
}

/// Handler for DELETE /stats
pub async fn reset_stats_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.checker.lock().await.reset_statistics();
    info!("statistics reset");
    Json(MessageResponse::new("Statistics reset"))
}

/// Handler for GET /cache
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.checker.lock().await.cache_stats();
    Json(stats.into())
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.checker.lock().await.clear_cache();
    info!("cache cleared");
    Json(MessageResponse::new("Cache cleared"))
}

/// Handler for PUT /cache
pub async fn cache_config_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheConfigRequest>,
) -> Result<Json<CacheStatsResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CheckerError::InvalidRequest(error_msg));
    }

    let mut checker = state.checker.lock().await;
    if let Some(enabled) = req.enabled {
        checker.set_cache_enabled(enabled);
    }
    if let Some(ttl) = req.ttl {
        checker.set_cache_ttl(Duration::from_secs(ttl));
    }
    info!(enabled = ?req.enabled, ttl = ?req.ttl, "cache settings updated");

    Ok(Json(checker.cache_stats().into()))
}

/// Handler for GET /countries
pub async fn countries_handler() -> Json<&'static [CountryConfig]> {
    Json(Catalog.countries())
}

/// Handler for GET /countries/:id
pub async fn country_info_handler(Path(id): Path<String>) -> Result<Json<CountryInfo>> {
    if Catalog.country(&id).is_none() {
        return Err(CheckerError::NotFound(format!("Unknown country {}", id)));
    }
    Ok(Json(Catalog.country_info(&id)))
}

/// Handler for GET /centres
pub async fn centres_handler(Query(query): Query<CityQuery>) -> Json<Vec<CentreSummary>> {
    let city = query.city.as_deref();
    let centres = match city {
        Some(city) => Catalog.visa_centres_in_city(city),
        None => Catalog.visa_centres().iter().collect(),
    };

    Json(
        centres
            .into_iter()
            .map(|centre| CentreSummary::new(centre, city))
            .collect(),
    )
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

//! API Routes
//!
//! Configures the Axum router with all checker endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    batch_check_handler, cache_config_handler, cache_stats_handler, centres_handler,
    check_handler, clear_cache_handler, countries_handler, country_info_handler,
    country_stats_handler, health_handler, reset_stats_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /check/:country` - Check one country (`?city=&visa_type=`)
/// - `POST /check` - Check a batch of countries
/// - `GET /stats`, `DELETE /stats` - Aggregate statistics, reset
/// - `GET /stats/:country` - Statistics for one country
/// - `GET /cache`, `PUT /cache`, `DELETE /cache` - Cache stats, settings, clear
/// - `GET /countries`, `GET /countries/:id` - Country catalog
/// - `GET /centres` - Visa centres (`?city=`)
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/check", post(batch_check_handler))
        .route("/check/:country", get(check_handler))
        .route("/stats", get(stats_handler).delete(reset_stats_handler))
        .route("/stats/:country", get(country_stats_handler))
        .route(
            "/cache",
            get(cache_stats_handler)
                .put(cache_config_handler)
                .delete(clear_cache_handler),
        )
        .route("/countries", get(countries_handler))
        .route("/countries/:id", get(country_info_handler))
        .route("/centres", get(centres_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Request and Response models for the checker API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{BatchCheckRequest, CacheConfigRequest, CityQuery, MAX_BATCH_SIZE};
pub use responses::{
    BatchCheckResponse, CacheStatsResponse, CentreSummary, ErrorResponse, HealthResponse,
    MessageResponse, StatsResponse,
};

//! HTTP clients for the Guidepath enrichment services
//!
//! Implements the guidepath-core `ExplanationService` and
//! `ResourceRecommender` traits against the external enrichment HTTP API.

/// Client implementation
pub mod client;

/// Configuration
pub mod config;

pub use client::EnrichmentClient;
pub use config::EnrichmentConfig;

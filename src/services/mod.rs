//! Business logic services
//!
//! The ingestion → scoring → aggregation pipeline, free of HTTP concerns.

pub mod aggregator;
pub mod normalizer;
pub mod scorer;
pub mod scoring_client;

//! # Tennis Stats
//!
//! A read-only HTTP API over a static tennis player dataset.
//!
//! ## Architecture
//!
//! - **models**: Player records and derived statistics
//! - **storage**: Dataset file loading
//! - **api**: REST API endpoints
//! - **calculate**: Dataset-wide statistics computation
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;

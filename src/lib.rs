//! Tapjoy Adapter - Tapjoy partner adapter for a mediation host
//!
//! This crate adapts the Tapjoy SDK's placement callbacks to the mediation
//! host's load/show contract for interstitial and rewarded ads, reconciling
//! out-of-order and duplicated partner events into exactly-once outcomes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

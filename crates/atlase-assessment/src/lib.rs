//! Core library for the ATLASE data architecture maturity and ROI assessment
//! service.
//!
//! The question catalog, maturity scorer, ROI projector, and recommendation
//! generator live here as pure, deterministic functions so the HTTP boundary,
//! the CLI demo, and any UI preview all compute from a single source of truth.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

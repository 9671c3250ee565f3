//! Automated scoring engine.
//!
//! Contains the background loop that claims due scoring jobs from the
//! durable queue and applies AI analysis results to their assessments.

pub mod scoring;

pub use scoring::ScoringEngine;

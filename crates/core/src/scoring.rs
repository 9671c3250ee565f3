//! Automated scoring simulation.
//!
//! Produces the rating and feedback written when an assessment moves from
//! `pending_AI_analysis` to `AI_rated`. The simulation stands in for a real
//! video-analysis model: a uniform rating in a fixed band plus a canned
//! feedback summary.

use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Inclusive bounds for a simulated rating.
pub const AI_RATING_MIN: f64 = 3.5;
pub const AI_RATING_MAX: f64 = 4.9;

/// Feedback attached to every simulated analysis.
pub const AI_FEEDBACK: &str = "AI observed strong eye contact (85% consistency), \
    fluent speech pace (130-140 WPM), and 90% positive sentiment. \
    Area for development: minimize filler words at start of sentences.";

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// The outcome of one simulated analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AiResult {
    pub rating: f64,
    pub feedback: String,
}

/// Run the simulated analysis.
///
/// The rating is uniform in [`AI_RATING_MIN`, `AI_RATING_MAX`], rounded to
/// one decimal place to match how ratings are displayed.
pub fn simulate() -> AiResult {
    let raw: f64 = rand::rng().random_range(AI_RATING_MIN..=AI_RATING_MAX);
    AiResult {
        rating: round_to_tenth(raw),
        feedback: AI_FEEDBACK.to_string(),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

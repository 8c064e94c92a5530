// Coaching rule services

pub mod activity_normalizer;
pub mod anomaly_detection_service;
pub mod date_parser;
pub mod intent_classifier;
pub mod plan_generation_service;
pub mod strength_workout_service;
pub mod trend_analysis_service;
pub mod workout_locator_service;

pub use activity_normalizer::{activity_records, normalize_record, parse_activities, parse_enveloped};
pub use anomaly_detection_service::AnomalyDetectionService;
pub use date_parser::DateParser;
pub use intent_classifier::{IntentClassifier, DEFAULT_INTENT_PATTERNS};
pub use plan_generation_service::{plan_weeks, PlanGenerationService};
pub use strength_workout_service::StrengthWorkoutService;
pub use trend_analysis_service::TrendAnalysisService;
pub use workout_locator_service::WorkoutLocatorService;

/// Round to `places` decimals. Exact ties go to the even digit, judged on the
/// float's exact decimal expansion.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

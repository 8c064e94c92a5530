use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
}

/// Aggregate pace, distance and heart-rate statistics over an activity window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub total_activities: usize,
    pub average_pace_min_per_km: f64,
    pub average_distance_km: f64,
    pub average_heart_rate: f64,
    pub first_half_pace_min_per_km: f64,
    pub second_half_pace_min_per_km: f64,
    pub trend: TrendDirection,
    pub analysis_date: NaiveDateTime,
}

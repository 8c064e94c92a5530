use chrono::{Local, NaiveDateTime};
use serde_json::Value;
use tracing::info;

use super::activity_normalizer::parse_activities;
use super::round_to;
use crate::errors::CoachError;
use crate::models::{Activity, TrendDirection, TrendReport};

/// Pace, distance and heart-rate trends over a chronological activity window
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendAnalysisService;

impl TrendAnalysisService {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_trends(&self, records: Vec<Value>) -> Result<TrendReport, CoachError> {
        self.analyze_trends_at(records, Local::now().naive_local())
    }

    pub fn analyze_trends_at(
        &self,
        records: Vec<Value>,
        analysis_date: NaiveDateTime,
    ) -> Result<TrendReport, CoachError> {
        let activities = parse_activities(records)?;
        self.summarize(&activities, analysis_date)
    }

    /// Compare mean pace of the first half of the window against the second.
    ///
    /// The window splits at `n / 2`, so the second half holds the odd
    /// activity. Heart rate is averaged over every activity, including those
    /// without a reading.
    pub fn summarize(
        &self,
        activities: &[Activity],
        analysis_date: NaiveDateTime,
    ) -> Result<TrendReport, CoachError> {
        if activities.is_empty() {
            return Err(CoachError::NoActivities);
        }

        let average_pace = mean(activities, |a| a.pace);
        let average_distance = mean(activities, |a| a.distance);
        let average_heart_rate = mean(activities, |a| a.heart_rate);

        let mid = activities.len() / 2;
        let (first_half_pace, second_half_pace) = if mid > 0 {
            (
                mean(&activities[..mid], |a| a.pace),
                mean(&activities[mid..], |a| a.pace),
            )
        } else {
            (0.0, 0.0)
        };

        let trend = if first_half_pace > 0.0 && second_half_pace < first_half_pace {
            TrendDirection::Improving
        } else {
            TrendDirection::Stable
        };

        info!(
            "Analyzed {} activities: trend {:?} ({:.2} -> {:.2} min/km)",
            activities.len(),
            trend,
            first_half_pace,
            second_half_pace
        );

        Ok(TrendReport {
            total_activities: activities.len(),
            average_pace_min_per_km: round_to(average_pace, 2),
            average_distance_km: round_to(average_distance, 2),
            average_heart_rate: round_to(average_heart_rate, 0),
            first_half_pace_min_per_km: round_to(first_half_pace, 2),
            second_half_pace_min_per_km: round_to(second_half_pace, 2),
            trend,
            analysis_date,
        })
    }
}

fn mean(activities: &[Activity], field: impl Fn(&Activity) -> f64) -> f64 {
    if activities.is_empty() {
        return 0.0;
    }
    activities.iter().map(field).sum::<f64>() / activities.len() as f64
}

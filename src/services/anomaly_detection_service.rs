use serde_json::Value;
use tracing::{debug, warn};

use super::activity_normalizer::parse_activities;
use super::round_to;
use crate::errors::CoachError;
use crate::models::{
    Activity, AlertDetails, AlertRule, AlertType, AnomalyFinding, AnomalyReport, Severity,
};

const MIN_ACTIVITIES: usize = 3;
const RECENT_WINDOW: usize = 3;
const LOAD_SPIKE_RATIO: f64 = 1.3;
const ELEVATED_HEART_RATE_BPM: f64 = 165.0;

const REDUCE_LOAD_ACTION: &str = "Consider reducing training load";
const REST_ACTION: &str = "Increase rest and recovery";

/// Overtraining and fatigue heuristics over recent activities
#[derive(Debug, Clone, Copy, Default)]
pub struct AnomalyDetectionService;

impl AnomalyDetectionService {
    pub fn new() -> Self {
        Self
    }

    pub fn detect_anomalies(&self, records: Vec<Value>) -> Result<AnomalyReport, CoachError> {
        if records.len() < MIN_ACTIVITIES {
            debug!(
                "Only {} activities, need {} for anomaly detection",
                records.len(),
                MIN_ACTIVITIES
            );
            return Ok(AnomalyReport::quiet());
        }

        let activities = parse_activities(records)?;
        Ok(self.evaluate(&activities))
    }

    /// Run every rule independently and collapse the findings
    pub fn evaluate(&self, activities: &[Activity]) -> AnomalyReport {
        if activities.len() < MIN_ACTIVITIES {
            return AnomalyReport::quiet();
        }

        let findings: Vec<AnomalyFinding> = [
            self.check_load_spike(activities),
            self.check_elevated_heart_rate(activities),
        ]
        .into_iter()
        .flatten()
        .collect();

        for finding in &findings {
            warn!(
                "{:?} rule fired: observed {} above threshold {}",
                finding.rule, finding.observed, finding.threshold
            );
        }

        AnomalyReport::from_findings(findings)
    }

    /// Mean of the last three distances against 1.3x the window mean
    fn check_load_spike(&self, activities: &[Activity]) -> Option<AnomalyFinding> {
        let total_distance: f64 = activities.iter().map(|a| a.distance).sum();
        let average_distance = total_distance / activities.len() as f64;

        let recent = &activities[activities.len() - RECENT_WINDOW..];
        let recent_average =
            recent.iter().map(|a| a.distance).sum::<f64>() / RECENT_WINDOW as f64;

        let threshold = average_distance * LOAD_SPIKE_RATIO;
        if recent_average <= threshold {
            return None;
        }

        Some(AnomalyFinding {
            rule: AlertRule::LoadSpike,
            alert_type: AlertType::Overtraining,
            severity: Severity::Medium,
            observed: round_to(recent_average, 2),
            threshold: round_to(threshold, 2),
            recommended_action: REDUCE_LOAD_ACTION.to_string(),
            details: AlertDetails {
                weekly_distance: Some(round_to(total_distance, 1)),
                spike_detected: Some(true),
                ..Default::default()
            },
        })
    }

    /// Mean of recorded heart rates; activities without one are skipped
    fn check_elevated_heart_rate(&self, activities: &[Activity]) -> Option<AnomalyFinding> {
        let heart_rates: Vec<f64> = activities
            .iter()
            .filter(|a| a.has_heart_rate())
            .map(|a| a.heart_rate)
            .collect();

        if heart_rates.is_empty() {
            return None;
        }

        let average_heart_rate = heart_rates.iter().sum::<f64>() / heart_rates.len() as f64;
        if average_heart_rate <= ELEVATED_HEART_RATE_BPM {
            return None;
        }

        Some(AnomalyFinding {
            rule: AlertRule::ElevatedHeartRate,
            alert_type: AlertType::Fatigue,
            severity: Severity::Medium,
            observed: round_to(average_heart_rate, 0),
            threshold: ELEVATED_HEART_RATE_BPM,
            recommended_action: REST_ACTION.to_string(),
            details: AlertDetails {
                average_heart_rate: Some(round_to(average_heart_rate, 0)),
                ..Default::default()
            },
        })
    }
}

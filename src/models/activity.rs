use serde::{Deserialize, Serialize};

/// A completed training session, as handed over by the telemetry collector.
///
/// Distances are kilometres and pace is minutes per kilometre. A heart rate of
/// zero means the device did not record one. Missing numeric fields read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub pace: f64,
    #[serde(default)]
    pub heart_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Activity {
    pub fn new(distance: f64, pace: f64, heart_rate: f64) -> Self {
        Self {
            distance,
            pace,
            heart_rate,
            date: None,
        }
    }

    pub fn has_heart_rate(&self) -> bool {
        self.heart_rate > 0.0
    }
}

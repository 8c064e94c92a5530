use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of searching a plan for the workout scheduled on a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLookup {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WorkoutLookup {
    pub fn found(workout: Value, week: Option<Value>) -> Self {
        Self {
            found: true,
            workout: Some(workout),
            week,
            message: None,
        }
    }

    pub fn not_found(date: NaiveDate) -> Self {
        Self {
            found: false,
            workout: None,
            week: None,
            message: Some(format!("No workout scheduled for {}", date)),
        }
    }
}

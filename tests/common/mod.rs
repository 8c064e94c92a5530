// Shared fixtures for integration tests

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

pub struct MockDataGenerator;

impl MockDataGenerator {
    pub fn plan_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
    }

    pub fn generated_at() -> NaiveDateTime {
        Self::plan_start().and_hms_opt(6, 45, 0).unwrap()
    }

    pub fn profile(target_race: &str, training_days_per_week: u8) -> Value {
        json!({
            "data": {
                "goals": {"target_race": target_race},
                "preferences": {"training_days_per_week": training_days_per_week}
            }
        })
    }

    /// Enveloped activities with the given distances, 5:30 pace and no heart rate
    pub fn activities(distances: &[f64]) -> Vec<Value> {
        distances
            .iter()
            .enumerate()
            .map(|(day, distance)| {
                json!({
                    "data": {
                        "distance": distance,
                        "pace": 5.5,
                        "heart_rate": 0,
                        "date": format!("2025-01-{:02}", day + 1)
                    }
                })
            })
            .collect()
    }
}

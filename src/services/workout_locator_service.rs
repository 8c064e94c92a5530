use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info};

use super::date_parser::DateParser;
use crate::errors::CoachError;
use crate::models::WorkoutLookup;

const ENVELOPE_KEY: &str = "data";
const UNKNOWN_WEEK: &str = "unknown";

/// Finds the workout scheduled for a day in a flat or week-grouped plan
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutLocatorService {
    date_parser: DateParser,
}

impl WorkoutLocatorService {
    pub fn new() -> Self {
        Self {
            date_parser: DateParser::new(),
        }
    }

    pub fn with_date_parser(date_parser: DateParser) -> Self {
        Self { date_parser }
    }

    /// Parse the target date, then search the enveloped plan
    pub fn extract_workout(&self, plan: &Value, date_text: &str) -> Result<WorkoutLookup, CoachError> {
        let target = self.date_parser.parse(date_text)?;
        self.find_workout(plan, target)
    }

    /// First workout whose date falls on `target`.
    ///
    /// A plan whose `weeks` is a list is searched week by week; otherwise its
    /// `workouts` list is searched directly.
    pub fn find_workout(&self, plan: &Value, target: NaiveDate) -> Result<WorkoutLookup, CoachError> {
        let plan_data = plan
            .get(ENVELOPE_KEY)
            .filter(|data| data.is_object())
            .ok_or(CoachError::InvalidPlanFormat)?;

        if let Some(weeks) = plan_data.get("weeks").and_then(Value::as_array) {
            debug!("Searching {} plan weeks for {}", weeks.len(), target);
            for week in weeks {
                let Some(workouts) = week.get("workouts").and_then(Value::as_array) else {
                    continue;
                };
                for workout in workouts {
                    if self.is_scheduled_on(workout, target)? {
                        let week_number = week
                            .get("week_number")
                            .cloned()
                            .unwrap_or_else(|| Value::from(UNKNOWN_WEEK));
                        info!("Found workout for {} in week {}", target, week_number);
                        return Ok(WorkoutLookup::found(workout.clone(), Some(week_number)));
                    }
                }
            }
        } else if let Some(workouts) = plan_data.get("workouts").and_then(Value::as_array) {
            debug!("Searching {} plan workouts for {}", workouts.len(), target);
            for workout in workouts {
                if self.is_scheduled_on(workout, target)? {
                    info!("Found workout for {}", target);
                    return Ok(WorkoutLookup::found(
                        workout.clone(),
                        workout.get("week_number").cloned(),
                    ));
                }
            }
        }

        Ok(WorkoutLookup::not_found(target))
    }

    fn is_scheduled_on(&self, workout: &Value, target: NaiveDate) -> Result<bool, CoachError> {
        let date_text = workout.get("date").and_then(Value::as_str).unwrap_or_default();
        Ok(self.date_parser.parse(date_text)? == target)
    }
}

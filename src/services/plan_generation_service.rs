use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::info;

use super::activity_normalizer::parse_enveloped;
use super::round_to;
use crate::errors::CoachError;
use crate::models::{PlannedWorkout, TrainingPlan, UserProfile, WorkoutType};

/// Session order within a week. Fewer training days take a prefix.
const WEEKLY_TEMPLATE: [WorkoutType; 4] = [
    WorkoutType::Easy,
    WorkoutType::Tempo,
    WorkoutType::Long,
    WorkoutType::Easy,
];

const SHORT_RACE_GOALS: [&str; 2] = ["10k", "5k"];
const SHORT_PLAN_WEEKS: u32 = 12;
const LONG_PLAN_WEEKS: u32 = 16;
const SESSION_SPACING_DAYS: i64 = 2;

/// Periodized running plans built from an athlete profile
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanGenerationService;

impl PlanGenerationService {
    pub fn new() -> Self {
        Self
    }

    /// Plan starting today
    pub fn generate_plan(&self, input: Value) -> Result<TrainingPlan, CoachError> {
        let created = Local::now().naive_local();
        self.generate_plan_at(input, created.date(), created)
    }

    /// Plan starting on a chosen day
    pub fn generate_plan_starting(
        &self,
        input: Value,
        start_date: NaiveDate,
    ) -> Result<TrainingPlan, CoachError> {
        self.generate_plan_at(input, start_date, Local::now().naive_local())
    }

    pub fn generate_plan_at(
        &self,
        input: Value,
        start_date: NaiveDate,
        created: NaiveDateTime,
    ) -> Result<TrainingPlan, CoachError> {
        let profile: UserProfile = parse_enveloped(input)?;
        profile.validate()?;
        Ok(self.build_plan(&profile, start_date, created))
    }

    pub fn build_plan(
        &self,
        profile: &UserProfile,
        start_date: NaiveDate,
        created: NaiveDateTime,
    ) -> TrainingPlan {
        let goal = profile.target_race().to_string();
        let weeks = plan_weeks(&goal);
        let training_days = (profile.training_days_per_week() as usize).min(WEEKLY_TEMPLATE.len());
        let week_template = &WEEKLY_TEMPLATE[..training_days];

        let mut workouts = Vec::with_capacity(weeks as usize * week_template.len());
        for week in 0..weeks {
            let week_start = start_date + Duration::weeks(week as i64);

            for (slot, workout_type) in week_template.iter().enumerate() {
                workouts.push(PlannedWorkout {
                    date: week_start + Duration::days(slot as i64 * SESSION_SPACING_DAYS),
                    workout_type: *workout_type,
                    distance_km: round_to(target_distance_km(*workout_type, week), 1),
                    pace: workout_type.pace_label(),
                    week_number: week + 1,
                });
            }
        }

        info!(
            "Generated {}-week {} plan with {} workouts starting {}",
            weeks,
            goal,
            workouts.len(),
            start_date
        );

        TrainingPlan {
            plan_id: format!("plan_{}", created.format("%Y%m%d_%H%M%S")),
            goal,
            weeks,
            workouts,
            created,
        }
    }
}

/// Short races get 12 weeks, everything else 16
pub fn plan_weeks(goal: &str) -> u32 {
    if SHORT_RACE_GOALS.contains(&goal) {
        SHORT_PLAN_WEEKS
    } else {
        LONG_PLAN_WEEKS
    }
}

/// Linear weekly progression per session type, in kilometres
fn target_distance_km(workout_type: WorkoutType, week_index: u32) -> f64 {
    let week = week_index as f64;
    match workout_type {
        WorkoutType::Easy => 5.0 + 0.3 * week,
        WorkoutType::Tempo => 6.0 + 0.2 * week,
        WorkoutType::Long => 8.0 + 0.5 * week,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaceLabel;
    use serde_json::json;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn created() -> NaiveDateTime {
        start().and_hms_opt(7, 30, 15).unwrap()
    }

    fn plan_for(profile: Value) -> TrainingPlan {
        PlanGenerationService::new()
            .generate_plan_at(profile, start(), created())
            .unwrap()
    }

    #[test]
    fn test_ten_k_plan_shape() {
        let plan = plan_for(json!({"goals": {"target_race": "10k"}, "preferences": {"training_days_per_week": 4}}));

        assert_eq!(plan.weeks, 12);
        assert_eq!(plan.workouts.len(), 48);
        assert_eq!(plan.goal, "10k");
        assert_eq!(plan.plan_id, "plan_20250106_073015");
    }

    #[test]
    fn test_progression_formulas() {
        let plan = plan_for(json!({}));

        let first = &plan.workouts[0];
        assert_eq!(first.workout_type, WorkoutType::Easy);
        assert_eq!(first.distance_km, 5.0);
        assert_eq!(first.week_number, 1);

        let last_long = plan
            .workouts_of_type(WorkoutType::Long)
            .last()
            .unwrap();
        assert_eq!(last_long.week_number, 12);
        assert_eq!(last_long.distance_km, 13.5);

        let last_tempo = plan.workouts_of_type(WorkoutType::Tempo).last().unwrap();
        assert_eq!(last_tempo.distance_km, 8.2);
    }

    #[test]
    fn test_session_dates_are_two_days_apart() {
        let plan = plan_for(json!({}));
        let dates: Vec<String> = plan.workouts[..5].iter().map(|w| w.date.to_string()).collect();

        assert_eq!(
            dates,
            vec!["2025-01-06", "2025-01-08", "2025-01-10", "2025-01-12", "2025-01-13"]
        );
    }

    #[test]
    fn test_pace_labels() {
        let plan = plan_for(json!({}));
        assert_eq!(plan.workouts[0].pace, PaceLabel::Easy);
        assert_eq!(plan.workouts[1].pace, PaceLabel::Tempo);
        assert_eq!(plan.workouts[2].pace, PaceLabel::Easy);
    }

    #[test]
    fn test_fewer_days_take_template_prefix() {
        let plan = plan_for(json!({"preferences": {"training_days_per_week": 2}}));
        assert_eq!(plan.workouts.len(), 24);
        assert_eq!(plan.workouts[0].workout_type, WorkoutType::Easy);
        assert_eq!(plan.workouts[1].workout_type, WorkoutType::Tempo);
        assert_eq!(plan.workouts_of_type(WorkoutType::Long).count(), 0);
    }

    #[test]
    fn test_more_days_than_template_cap_at_four() {
        let plan = plan_for(json!({"preferences": {"training_days_per_week": 6}}));
        assert_eq!(plan.workouts.len(), 48);
    }

    #[test]
    fn test_longer_goals_get_sixteen_weeks() {
        let plan = plan_for(json!({"data": {"goals": {"target_race": "marathon"}}}));
        assert_eq!(plan.weeks, 16);
        assert_eq!(plan.workouts.len(), 64);
        assert_eq!(plan_weeks("5k"), 12);
        assert_eq!(plan_weeks("half"), 16);
    }

    #[test]
    fn test_invalid_frequency_is_rejected() {
        let result = PlanGenerationService::new().generate_plan_at(
            json!({"preferences": {"training_days_per_week": 0}}),
            start(),
            created(),
        );
        assert!(matches!(result, Err(CoachError::InvalidInput(_))));
    }

    #[test]
    fn test_non_object_profile_is_rejected() {
        let result = PlanGenerationService::new().generate_plan_at(json!([1, 2]), start(), created());
        assert!(matches!(result, Err(CoachError::InvalidInput(_))));
    }
}

mod common;

use assert_matches::assert_matches;
use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

use common::MockDataGenerator;
use run_coach::models::*;
use run_coach::services::*;
use run_coach::CoachError;

fn generate(profile: Value) -> TrainingPlan {
    PlanGenerationService::new()
        .generate_plan_at(profile, MockDataGenerator::plan_start(), MockDataGenerator::generated_at())
        .unwrap()
}

fn locator() -> WorkoutLocatorService {
    WorkoutLocatorService::with_date_parser(DateParser::with_today(MockDataGenerator::plan_start()))
}

#[test]
fn test_intent_training_plan_and_general() {
    let classifier = IntentClassifier::new();
    assert_eq!(classifier.classify("I need a training plan"), Intent::TrainingPlan);
    assert_eq!(classifier.classify("thanks, see you soon"), Intent::General);
}

#[test]
fn test_trend_single_activity() {
    let report = TrendAnalysisService::new()
        .analyze_trends(vec![json!({"distance": 5, "pace": 5, "heart_rate": 150})])
        .unwrap();

    assert_eq!(report.total_activities, 1);
    assert_eq!(report.trend, TrendDirection::Stable);
}

#[test]
fn test_trend_decreasing_pace_is_improving() {
    let report = TrendAnalysisService::new()
        .analyze_trends(vec![json!({"pace": 10}), json!({"data": {"pace": 5}})])
        .unwrap();

    assert_eq!(report.trend, TrendDirection::Improving);
}

#[test]
fn test_trend_report_document_shape() {
    let report = TrendAnalysisService::new()
        .analyze_trends(MockDataGenerator::activities(&[5.0, 10.0]))
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["total_activities"], 2);
    assert_eq!(value["average_distance_km"], 7.5);
    assert_eq!(value["average_pace_min_per_km"], 5.5);
    assert_eq!(value["trend"], "stable");
    assert!(value["analysis_date"].is_string());
}

#[test]
fn test_anomaly_load_spike() {
    let report = AnomalyDetectionService::new()
        .detect_anomalies(MockDataGenerator::activities(&[5.0, 5.0, 5.0, 5.0, 5.0, 20.0, 20.0, 20.0]))
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["has_alerts"], true);
    assert_eq!(value["alert_type"], "overtraining");
    assert_eq!(value["severity"], "medium");
    assert_eq!(value["details"], json!({"weekly_distance": 85.0, "spike_detected": true}));
    assert_eq!(value["findings"][0]["rule"], "load_spike");
    assert_eq!(value["findings"][0]["observed"], 20.0);
}

#[test]
fn test_plan_reference_distances() {
    let plan = generate(MockDataGenerator::profile("10k", 4));

    assert_eq!(plan.workouts.len(), 48);
    assert_eq!(plan.workouts[0].distance_km, 5.0);
    // Week index 11 is the final week; the long run is its third slot
    let final_long = &plan.workouts[11 * 4 + 2];
    assert_eq!(final_long.workout_type, WorkoutType::Long);
    assert_eq!(final_long.distance_km, 13.5);
}

#[test]
fn test_plan_document_shape() {
    let plan = generate(MockDataGenerator::profile("5k", 3));
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(value["plan_id"], "plan_20250113_064500");
    assert_eq!(value["weeks"], 12);
    assert_eq!(
        value["workouts"][1],
        json!({"date": "2025-01-15", "type": "tempo", "distance_km": 6.0, "pace": "tempo", "week_number": 1})
    );
}

#[test]
fn test_weekly_layout_groups_by_week() {
    let plan = generate(MockDataGenerator::profile("half", 3));
    let weekly = plan.to_weekly();

    assert_eq!(weekly.weeks.len(), 16);
    assert!(weekly.weeks.iter().all(|w| w.workouts.len() == 3));
    assert_eq!(weekly.weeks[15].week_number, 16);
    assert_eq!(weekly.weeks[15].workouts[0].week_number, 16);
}

#[test]
fn test_locator_date_formats_agree() {
    let plan = json!({"data": serde_json::to_value(generate(MockDataGenerator::profile("10k", 4))).unwrap()});
    let locator = locator();

    let iso = locator.extract_workout(&plan, "2025-01-15").unwrap();
    assert!(iso.found);
    assert_eq!(locator.extract_workout(&plan, "2025/01/15").unwrap(), iso);
    assert_eq!(locator.extract_workout(&plan, "15-01-2025").unwrap(), iso);
    assert_eq!(locator.extract_workout(&plan, "01/15/2025").unwrap(), iso);
}

#[test]
fn test_locator_not_found_versus_parse_error() {
    let plan = json!({"data": serde_json::to_value(generate(MockDataGenerator::profile("10k", 1))).unwrap()});
    let locator = locator();

    // Only Mondays are scheduled with one day per week
    let lookup = locator.extract_workout(&plan, "2025-01-14").unwrap();
    assert!(!lookup.found);

    let result = locator.extract_workout(&plan, "14.01.2025");
    assert_matches!(result, Err(CoachError::DateParse(text)) if text == "14.01.2025");
}

#[test]
fn test_locator_requires_envelope() {
    let plan = serde_json::to_value(generate(MockDataGenerator::profile("5k", 2))).unwrap();
    assert_matches!(
        locator().extract_workout(&plan, "2025-01-13"),
        Err(CoachError::InvalidPlanFormat)
    );
}

fn layouts(plan: &TrainingPlan) -> Vec<Value> {
    [PlanLayout::Flat, PlanLayout::Weekly]
        .into_iter()
        .map(|layout| json!({"data": plan.to_layout_value(layout).unwrap()}))
        .collect()
}

proptest! {
    #[test]
    fn prop_every_generated_workout_is_locatable(
        goal in prop::sample::select(vec!["5k", "10k", "half", "marathon"]),
        days in 1u8..=7,
    ) {
        let plan = generate(MockDataGenerator::profile(goal, days));
        let locator = locator();

        for document in layouts(&plan) {
            for workout in &plan.workouts {
                let lookup = locator.find_workout(&document, workout.date).unwrap();
                prop_assert!(lookup.found);
                prop_assert_eq!(lookup.workout, Some(serde_json::to_value(workout).unwrap()));
                prop_assert_eq!(lookup.week, Some(json!(workout.week_number)));
            }
        }
    }

    #[test]
    fn prop_dates_outside_plan_are_not_found(offset in 1i64..60) {
        let plan = generate(MockDataGenerator::profile("10k", 4));
        let before = MockDataGenerator::plan_start() - Duration::days(offset);

        for document in layouts(&plan) {
            let lookup = locator().find_workout(&document, before).unwrap();
            prop_assert!(!lookup.found);
        }
    }

    #[test]
    fn prop_distances_never_decrease_within_a_type(days in 1u8..=4) {
        let plan = generate(MockDataGenerator::profile("marathon", days));

        for workout_type in [WorkoutType::Easy, WorkoutType::Tempo, WorkoutType::Long] {
            let distances: Vec<f64> = plan.workouts_of_type(workout_type).map(|w| w.distance_km).collect();
            prop_assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn prop_short_windows_never_alert(distances in prop::collection::vec(0.0f64..100.0, 0..3)) {
        let report = AnomalyDetectionService::new()
            .detect_anomalies(MockDataGenerator::activities(&distances))
            .unwrap();
        prop_assert!(!report.has_alerts);
    }
}

#[test]
fn test_start_date_is_first_workout() {
    let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let plan = PlanGenerationService::new()
        .generate_plan_starting(json!({}), start)
        .unwrap();
    assert_eq!(plan.workouts[0].date, start);
}

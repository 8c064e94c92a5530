use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection, StringRejection},
        Query, State,
    },
    response::Json,
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::errors::CoachError;
use crate::models::{AnomalyReport, PlanLayout, StrengthWorkout, TrendReport, WorkoutLookup};
use crate::services::{
    activity_records, AnomalyDetectionService, DateParser, IntentClassifier,
    PlanGenerationService, StrengthWorkoutService, TrendAnalysisService, WorkoutLocatorService,
};

#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    pub layout: Option<PlanLayout>,
    pub start_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutQuery {
    pub date: Option<String>,
}

/// Shared, read-only state. Requests never see each other's data.
#[derive(Clone)]
pub struct CoachingAppState {
    pub intent_classifier: Arc<IntentClassifier>,
}

pub fn coaching_routes() -> Router {
    let shared_state = CoachingAppState {
        intent_classifier: Arc::new(IntentClassifier::new()),
    };

    Router::new()
        .route("/intent", post(classify_intent))
        .route("/trends", post(analyze_trends))
        .route("/anomalies", post(detect_anomalies))
        .route("/plans", post(generate_plan))
        .route("/plans/workout", post(extract_workout))
        .route("/strength", post(generate_strength_workout))
        .with_state(shared_state)
}

fn parse_body(body: Result<Bytes, BytesRejection>) -> Result<Value, CoachError> {
    let body = body.map_err(|rejection| CoachError::InvalidInput(rejection.body_text()))?;
    Ok(serde_json::from_slice(&body)?)
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, CoachError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| CoachError::InvalidInput(rejection.body_text()))
}

/// Classify raw message text; responds with the bare intent label
pub async fn classify_intent(
    State(state): State<CoachingAppState>,
    body: Result<String, StringRejection>,
) -> Result<String, CoachError> {
    let body = body.map_err(|rejection| CoachError::InvalidInput(rejection.body_text()))?;
    Ok(state.intent_classifier.classify(&body).to_string())
}

/// Trend report over a JSON array of activities
pub async fn analyze_trends(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TrendReport>, CoachError> {
    let records = activity_records(parse_body(body)?)?;
    let report = TrendAnalysisService::new().analyze_trends(records)?;
    Ok(Json(report))
}

/// Anomaly report over a JSON array of activities
pub async fn detect_anomalies(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnomalyReport>, CoachError> {
    let records = activity_records(parse_body(body)?)?;
    let report = AnomalyDetectionService::new().detect_anomalies(records)?;
    Ok(Json(report))
}

/// Generate a training plan from a user profile
pub async fn generate_plan(
    query: Result<Query<PlanQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, CoachError> {
    let query = query_params(query)?;
    let profile = parse_body(body)?;
    let service = PlanGenerationService::new();

    let plan = match query.start_date {
        Some(start_date) => {
            let start_date = DateParser::new().parse(&start_date)?;
            service.generate_plan_starting(profile, start_date)?
        }
        None => service.generate_plan(profile)?,
    };

    Ok(Json(plan.to_layout_value(query.layout.unwrap_or_default())?))
}

/// Look up the workout scheduled on `?date=` in an enveloped plan
pub async fn extract_workout(
    query: Result<Query<WorkoutQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<WorkoutLookup>, CoachError> {
    let date = query_params(query)?
        .date
        .ok_or_else(|| CoachError::InvalidInput("Date argument required".to_string()))?;
    // Date is validated before the body, so a bad date wins over a bad plan
    let target = DateParser::new().parse(&date)?;
    let plan = parse_body(body)?;
    let lookup = WorkoutLocatorService::new().find_workout(&plan, target)?;
    Ok(Json(lookup))
}

pub async fn generate_strength_workout(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<StrengthWorkout>, CoachError> {
    let profile = parse_body(body)?;
    Ok(Json(StrengthWorkoutService::new().generate_strength_workout(&profile)))
}

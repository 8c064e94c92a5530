use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Session category within the weekly template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Easy,
    Tempo,
    Long,
}

impl WorkoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Easy => "easy",
            WorkoutType::Tempo => "tempo",
            WorkoutType::Long => "long",
        }
    }

    /// Long runs are run at easy effort
    pub fn pace_label(&self) -> PaceLabel {
        match self {
            WorkoutType::Tempo => PaceLabel::Tempo,
            WorkoutType::Easy | WorkoutType::Long => PaceLabel::Easy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceLabel {
    Easy,
    Tempo,
}

/// One scheduled session of a generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub distance_km: f64,
    pub pace: PaceLabel,
    pub week_number: u32,
}

/// Generated plan in its flat layout: every workout in emission order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub plan_id: String,
    pub goal: String,
    pub weeks: u32,
    pub workouts: Vec<PlannedWorkout>,
    pub created: NaiveDateTime,
}

/// Workouts belonging to one plan week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanWeek {
    pub week_number: u32,
    pub workouts: Vec<PlannedWorkout>,
}

/// Same plan grouped by week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrainingPlan {
    pub plan_id: String,
    pub goal: String,
    pub created: NaiveDateTime,
    pub weeks: Vec<PlanWeek>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanLayout {
    #[default]
    Flat,
    Weekly,
}

impl TrainingPlan {
    pub fn workouts_of_type(&self, workout_type: WorkoutType) -> impl Iterator<Item = &PlannedWorkout> {
        self.workouts
            .iter()
            .filter(move |w| w.workout_type == workout_type)
    }

    /// Regroup the flat workout list by week number.
    ///
    /// Weeks without sessions still appear so the week count is preserved.
    pub fn to_weekly(&self) -> WeeklyTrainingPlan {
        let mut weeks: Vec<PlanWeek> = (1..=self.weeks)
            .map(|week_number| PlanWeek {
                week_number,
                workouts: Vec::new(),
            })
            .collect();

        for workout in &self.workouts {
            if let Some(week) = weeks.get_mut(workout.week_number.saturating_sub(1) as usize) {
                week.workouts.push(workout.clone());
            }
        }

        WeeklyTrainingPlan {
            plan_id: self.plan_id.clone(),
            goal: self.goal.clone(),
            created: self.created,
            weeks,
        }
    }

    /// Render the plan in the requested layout
    pub fn to_layout_value(&self, layout: PlanLayout) -> Result<serde_json::Value, serde_json::Error> {
        match layout {
            PlanLayout::Flat => serde_json::to_value(self),
            PlanLayout::Weekly => serde_json::to_value(self.to_weekly()),
        }
    }
}

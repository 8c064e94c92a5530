use serde::{Deserialize, Serialize};
use std::fmt;

/// What the athlete is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    TrainingPlan,
    Workout,
    Strength,
    Nutrition,
    Hydration,
    Injury,
    Analysis,
    DailyBriefing,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::TrainingPlan => "training_plan",
            Intent::Workout => "workout",
            Intent::Strength => "strength",
            Intent::Nutrition => "nutrition",
            Intent::Hydration => "hydration",
            Intent::Injury => "injury",
            Intent::Analysis => "analysis",
            Intent::DailyBriefing => "daily_briefing",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

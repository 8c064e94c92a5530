use serde::{Deserialize, Serialize};

use crate::errors::CoachError;

pub const DEFAULT_TARGET_RACE: &str = "10k";
pub const DEFAULT_TRAINING_DAYS_PER_WEEK: u8 = 4;

/// Athlete goal and scheduling preference used for plan generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub goals: RaceGoals,
    #[serde(default)]
    pub preferences: TrainingPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceGoals {
    #[serde(default = "default_target_race")]
    pub target_race: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPreferences {
    #[serde(default = "default_training_days")]
    pub training_days_per_week: u8,
}

fn default_target_race() -> String {
    DEFAULT_TARGET_RACE.to_string()
}

fn default_training_days() -> u8 {
    DEFAULT_TRAINING_DAYS_PER_WEEK
}

impl Default for RaceGoals {
    fn default() -> Self {
        Self {
            target_race: default_target_race(),
        }
    }
}

impl Default for TrainingPreferences {
    fn default() -> Self {
        Self {
            training_days_per_week: default_training_days(),
        }
    }
}

impl UserProfile {
    pub fn new(target_race: impl Into<String>, training_days_per_week: u8) -> Self {
        Self {
            goals: RaceGoals {
                target_race: target_race.into(),
            },
            preferences: TrainingPreferences {
                training_days_per_week,
            },
        }
    }

    pub fn target_race(&self) -> &str {
        &self.goals.target_race
    }

    pub fn training_days_per_week(&self) -> u8 {
        self.preferences.training_days_per_week
    }

    /// Training frequency must fit in a calendar week
    pub fn validate(&self) -> Result<(), CoachError> {
        let days = self.training_days_per_week();
        if !(1..=7).contains(&days) {
            return Err(CoachError::InvalidInput(format!(
                "training_days_per_week must be between 1 and 7, got {}",
                days
            )));
        }
        Ok(())
    }
}

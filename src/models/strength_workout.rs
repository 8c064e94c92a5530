use serde::{Deserialize, Serialize};

/// Repetition target: a count, or a hold such as "60s"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Hold(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: Reps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedBlock {
    pub name: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthWorkout {
    pub workout_type: String,
    pub duration_minutes: u32,
    pub exercises: Vec<Exercise>,
    pub warmup: Vec<TimedBlock>,
    pub cooldown: Vec<TimedBlock>,
}

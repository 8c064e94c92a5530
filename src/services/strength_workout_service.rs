use serde_json::Value;
use tracing::debug;

use crate::models::{Exercise, Reps, StrengthWorkout, TimedBlock};

const SESSION_MINUTES: u32 = 45;

#[derive(Debug, Clone, Copy)]
enum RepTarget {
    Count(u32),
    Hold(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct ExerciseTemplate {
    name: &'static str,
    sets: u32,
    reps: RepTarget,
}

const fn exercise(name: &'static str, sets: u32, reps: RepTarget) -> ExerciseTemplate {
    ExerciseTemplate { name, sets, reps }
}

const LOWER_BODY: [ExerciseTemplate; 4] = [
    exercise("Squats", 3, RepTarget::Count(12)),
    exercise("Lunges", 3, RepTarget::Count(10)),
    exercise("Single-leg Deadlift", 3, RepTarget::Count(10)),
    exercise("Calf Raises", 3, RepTarget::Count(15)),
];

const CORE: [ExerciseTemplate; 4] = [
    exercise("Plank", 3, RepTarget::Hold("60s")),
    exercise("Side Plank", 3, RepTarget::Hold("45s")),
    exercise("Dead Bug", 3, RepTarget::Count(12)),
    exercise("Bird Dog", 3, RepTarget::Count(10)),
];

const UPPER_BODY: [ExerciseTemplate; 3] = [
    exercise("Push-ups", 3, RepTarget::Count(12)),
    exercise("Rows", 3, RepTarget::Count(12)),
    exercise("Shoulder Press", 3, RepTarget::Count(10)),
];

/// How many exercises each category contributes, in session order
const SELECTION: [(&[ExerciseTemplate], usize); 3] = [(&LOWER_BODY, 3), (&CORE, 2), (&UPPER_BODY, 2)];

const WARMUP: [(&str, &str); 2] = [
    ("Dynamic Stretching", "5 minutes"),
    ("Light Cardio", "5 minutes"),
];

const COOLDOWN: [(&str, &str); 1] = [("Static Stretching", "5 minutes")];

/// Runner-focused accessory strength session
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthWorkoutService;

impl StrengthWorkoutService {
    pub fn new() -> Self {
        Self
    }

    /// The session is the same for every athlete; the profile is not consulted
    pub fn generate_strength_workout(&self, _profile: &Value) -> StrengthWorkout {
        let exercises: Vec<Exercise> = SELECTION
            .iter()
            .flat_map(|(category, count)| category.iter().take(*count))
            .map(|template| Exercise {
                name: template.name.to_string(),
                sets: template.sets,
                reps: match template.reps {
                    RepTarget::Count(count) => Reps::Count(count),
                    RepTarget::Hold(hold) => Reps::Hold(hold.to_string()),
                },
            })
            .collect();

        debug!("Selected {} strength exercises", exercises.len());

        StrengthWorkout {
            workout_type: "strength".to_string(),
            duration_minutes: SESSION_MINUTES,
            exercises,
            warmup: timed_blocks(&WARMUP),
            cooldown: timed_blocks(&COOLDOWN),
        }
    }
}

fn timed_blocks(blocks: &[(&str, &str)]) -> Vec<TimedBlock> {
    blocks
        .iter()
        .map(|(name, duration)| TimedBlock {
            name: name.to_string(),
            duration: duration.to_string(),
        })
        .collect()
}

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::errors::CoachError;
use crate::models::Intent;

/// Intent patterns in evaluation order. The first intent with a matching
/// pattern wins, so earlier rows shadow later ones.
pub const DEFAULT_INTENT_PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::TrainingPlan,
        &[
            r"(create|generate|make|build).*training plan",
            r"training.*plan",
            r"(create|generate).*plan.*race",
            r"(prepare|train).*for.*(race|marathon|10k|5k|half)",
        ],
    ),
    (
        Intent::Workout,
        &[
            r"(today|tomorrow).*workout",
            r"workout.*(today|tomorrow)",
            r"what.*workout",
            r"(show|tell).*workout",
        ],
    ),
    (
        Intent::Strength,
        &[
            r"strength.*workout",
            r"(generate|create).*strength",
            r"(gym|weight|resistance).*training",
        ],
    ),
    (
        Intent::Nutrition,
        &[
            r"(what|should).*eat",
            r"meal.*plan",
            r"nutrition.*advice",
            r"(food|diet).*recommendation",
        ],
    ),
    (
        Intent::Hydration,
        &[
            r"(how much|should).*water",
            r"hydration.*strategy",
            r"drink.*during.*run",
        ],
    ),
    (
        Intent::Injury,
        &[r"(have|feel).*pain", r"(hurt|sore|ache)", r"injury", r"rehab"],
    ),
    (
        Intent::Analysis,
        &[
            r"(how|what).*progress",
            r"(show|view).*data",
            r"(analyze|analysis).*performance",
        ],
    ),
    (
        Intent::DailyBriefing,
        &[r"daily.*briefing", r"today.*summary", r"what.*today"],
    ),
];

/// First-match intent classification over an ordered pattern table
pub struct IntentClassifier {
    rules: Vec<(Intent, Vec<Regex>)>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        let table = DEFAULT_INTENT_PATTERNS
            .iter()
            .map(|(intent, patterns)| (*intent, patterns.iter()));

        Self::with_patterns(table).expect("built-in intent patterns must compile")
    }

    /// Build a classifier from a custom table, keeping its order
    pub fn with_patterns<T, P, S>(table: T) -> Result<Self, CoachError>
    where
        T: IntoIterator<Item = (Intent, P)>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = table
            .into_iter()
            .map(|(intent, patterns)| -> Result<(Intent, Vec<Regex>), CoachError> {
                let compiled = patterns
                    .into_iter()
                    .map(|pattern| {
                        RegexBuilder::new(pattern.as_ref())
                            .case_insensitive(true)
                            .build()
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((intent, compiled))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    pub fn classify(&self, message: &str) -> Intent {
        let message_lower = message.trim().to_lowercase();

        let intent = self
            .rules
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(&message_lower)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::General);

        debug!("Classified message as {}", intent);
        intent
    }
}

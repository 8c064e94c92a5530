use anyhow::Result;
use clap::Args;
use serde_json::Value;

use run_coach::services::StrengthWorkoutService;
use run_coach::CoachError;

use super::{read_stdin, CommandContext};

#[derive(Args)]
pub struct StrengthWorkoutCommand {}

impl StrengthWorkoutCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        // The profile does not change the session, so empty input is accepted
        let input = read_stdin()?;
        let profile = if input.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&input).map_err(CoachError::from)?
        };

        let workout = StrengthWorkoutService::new().generate_strength_workout(&profile);
        ctx.emit("strength", &workout)?;
        Ok(())
    }
}

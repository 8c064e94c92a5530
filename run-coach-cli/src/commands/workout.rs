use anyhow::Result;
use clap::Args;

use run_coach::services::{DateParser, WorkoutLocatorService};
use run_coach::CoachError;

use super::{read_stdin_json, CommandContext};

#[derive(Args)]
pub struct ExtractWorkoutCommand {
    /// Date to look up (YYYY-MM-DD, YYYY/MM/DD, DD-MM-YYYY, MM/DD/YYYY, today, tomorrow)
    date: Option<String>,
}

impl ExtractWorkoutCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let date = self
            .date
            .ok_or_else(|| CoachError::InvalidInput("Date argument required".to_string()))?;

        let target = DateParser::new().parse(&date)?;
        let plan = read_stdin_json()?;
        let lookup = WorkoutLocatorService::new().find_workout(&plan, target)?;

        ctx.emit("workouts", &lookup)?;
        Ok(())
    }
}

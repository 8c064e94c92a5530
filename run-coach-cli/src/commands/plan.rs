use anyhow::Result;
use clap::{Args, ValueEnum};

use run_coach::models::PlanLayout;
use run_coach::services::{DateParser, PlanGenerationService};

use super::{read_stdin_json, CommandContext};

#[derive(Args)]
pub struct GeneratePlanCommand {
    /// First day of the plan (defaults to today)
    #[arg(long)]
    start_date: Option<String>,

    /// Output layout
    #[arg(long, value_enum, default_value_t = LayoutArg::Flat)]
    layout: LayoutArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    /// One list of workouts
    Flat,
    /// Workouts grouped by week
    Weekly,
}

impl From<LayoutArg> for PlanLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Flat => PlanLayout::Flat,
            LayoutArg::Weekly => PlanLayout::Weekly,
        }
    }
}

impl GeneratePlanCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let service = PlanGenerationService::new();
        let profile = read_stdin_json()?;

        let plan = match self.start_date {
            Some(text) => {
                let start_date = DateParser::new().parse(&text)?;
                service.generate_plan_starting(profile, start_date)?
            }
            None => service.generate_plan(profile)?,
        };

        let document = plan.to_layout_value(self.layout.into())?;
        ctx.emit("plans", &document)?;
        Ok(())
    }
}

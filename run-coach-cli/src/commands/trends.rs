use anyhow::Result;
use clap::Args;

use run_coach::services::{activity_records, TrendAnalysisService};

use super::{read_stdin_json, CommandContext};

#[derive(Args)]
pub struct AnalyzeTrendsCommand {}

impl AnalyzeTrendsCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let records = activity_records(read_stdin_json()?)?;
        let report = TrendAnalysisService::new().analyze_trends(records)?;

        ctx.emit("trends", &report)?;
        Ok(())
    }
}

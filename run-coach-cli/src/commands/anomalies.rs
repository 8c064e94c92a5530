use anyhow::Result;
use clap::Args;

use run_coach::services::{activity_records, AnomalyDetectionService};

use super::{read_stdin_json, CommandContext};

#[derive(Args)]
pub struct DetectAnomaliesCommand {}

impl DetectAnomaliesCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let records = activity_records(read_stdin_json()?)?;
        let report = AnomalyDetectionService::new().detect_anomalies(records)?;

        if report.has_alerts {
            let document = serde_json::to_value(&report)?;
            ctx.publish("alerts", &document)?;
        }

        ctx.emit("anomalies", &report)?;
        Ok(())
    }
}

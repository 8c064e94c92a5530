use anyhow::Result;
use clap::Args;
use serde_json::json;

use run_coach::services::IntentClassifier;

use super::{read_stdin, CommandContext};

#[derive(Args)]
pub struct ParseIntentCommand {
    /// Message to classify; read from stdin when omitted
    message: Option<String>,
}

impl ParseIntentCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let message = match self.message {
            Some(message) => message,
            None => read_stdin()?,
        };

        let intent = IntentClassifier::new().classify(&message);
        ctx.publish("intent", &json!({ "intent": intent.as_str() }))?;

        // Bare label, not a JSON document
        println!("{}", intent);
        Ok(())
    }
}
